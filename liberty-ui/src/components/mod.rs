mod button;
pub use button::*;

mod util;
pub use util::*;

mod sidebar;
pub use sidebar::*;

mod input;
pub use input::*;

mod header;
pub use header::*;

mod layout;
pub use layout::*;

pub mod toast;
pub use toast::*;

mod colors;
pub use colors::*;

mod styles;
pub use styles::*;

mod wallet_connect;
pub use wallet_connect::*;

mod status_message;
pub use status_message::*;
