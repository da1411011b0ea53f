//! Database Models
//!
//! Documents stored in SurrealDB and the payloads that create them.

pub mod serde_helpers;

pub mod apple;
pub mod contact;
pub mod content;
pub mod order;

pub use apple::{Apple, AppleCreate, AppleList, AppleUpdate};
pub use contact::{ContactMessage, ContactMessageCreate, ContactMessageList, ContactMessageReceipt};
pub use content::{
    AboutCard, AboutContent, ContentSection, GalleryContent, GalleryImage, HeroContent,
    SiteContent,
};
pub use order::{Order, OrderItem, OrderList, OrderResponse};
