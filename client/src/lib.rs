//! Client side of the freedesktop.org desktop notification protocol.
//!
//! Each notification displayed is allocated an id by the server (see
//! [`Notifier::send`]). The id is unique within the D-Bus session and will not be
//! recycled while the server runs, unless the capacity of a `u32` is exceeded. It
//! can be used to hide the notification before its expiration timeout is reached
//! ([`Notifier::close`]) or to atomically replace it with another one
//! ([`Notification::replaces`]), which modifies the notification while it is on
//! screen.
//!
//! Connecting to the bus is left to the caller:
//!
//! ```no_run
//! # async fn run() -> desknotify::Result<()> {
//! use desknotify::{Notification, NotificationClient, Notifier, Urgency};
//!
//! let conn = zbus::Connection::session().await?;
//! let client = NotificationClient::new(&conn).await?;
//! let id = client
//!     .send(&Notification::new("Build finished").body("0 warnings").urgency(Urgency::Low))
//!     .await?;
//! client.close(id).await?;
//! # Ok(())
//! # }
//! ```

mod dbus;
mod error;
mod notification;

pub use dbus::xdg::{
    send_notification, Destination, NotificationClient, NotificationsProxy, Notifier,
    ServerInformation, INTERFACE, OBJECT_PATH, SERVICE,
};
pub use error::{Error, Result};
pub use notification::{Hints, Notification, NotificationId, Timeout, Urgency};
pub use zbus;
