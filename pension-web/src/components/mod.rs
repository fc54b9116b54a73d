//! UI Components

pub mod footer;
pub mod header;
pub mod loading;
pub mod wallet;

pub use footer::Footer;
pub use header::Header;
pub use loading::Loading;
pub use wallet::WalletWidget;
