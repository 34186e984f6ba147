//! # TUI Components
//!
//! The pieces of the Conversations page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields, created each frame:
//! - `Heading`: page title, description, endpoint and status
//! - `Button`: the "Generate" button
//! - `Loader`: spinner box while a request is in flight
//! - `Empty`: "Start a conversation" placeholder
//! - `MessageView`: one conversation entry with its avatar
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep state across frames and emit events:
//! - `InputBox`: the prompt field
//! - `MessageList`: scrollable conversation, newest first, with layout caching
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── heading.rs       (page header)
//! ├── input_box/       (prompt field + cursor)
//! ├── button.rs        (Generate button)
//! ├── loader.rs        (pending indicator)
//! ├── empty.rs         (empty state)
//! ├── avatar.rs        (user/bot badges)
//! ├── message.rs       (single entry)
//! └── message_list.rs  (scrollable container)
//! ```

pub mod avatar;
pub mod button;
pub mod empty;
pub mod heading;
pub mod input_box;
pub mod loader;
pub mod message;
pub mod message_list;

pub use button::Button;
pub use empty::Empty;
pub use heading::Heading;
pub use input_box::{InputBox, InputEvent};
pub use loader::Loader;
pub use message_list::{MessageList, MessageListState};
