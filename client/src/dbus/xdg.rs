use crate::{Error, Notification, NotificationId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use zbus::{
    proxy::CacheProperties,
    zvariant::{Structure, Value},
    Connection,
};

pub const SERVICE: &str = "org.freedesktop.Notifications";
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";
pub const INTERFACE: &str = "org.freedesktop.Notifications";

const NOTIFY: &str = "Notify";
const CLOSE_NOTIFICATION: &str = "CloseNotification";
const GET_CAPABILITIES: &str = "GetCapabilities";
const GET_SERVER_INFORMATION: &str = "GetServerInformation";

#[zbus::proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications",
    gen_blocking = false
)]
pub trait Notifications {
    #[allow(clippy::too_many_arguments)]
    async fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: &[String],
        hints: &HashMap<String, Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;

    async fn close_notification(&self, id: u32) -> zbus::Result<()>;

    async fn get_capabilities(&self) -> zbus::Result<Vec<String>>;
}

/// Where the notification server lives on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Destination {
    pub service: String,
    pub path: String,
    pub interface: String,
}

impl Default for Destination {
    fn default() -> Self {
        Self {
            service: SERVICE.to_string(),
            path: OBJECT_PATH.to_string(),
            interface: INTERFACE.to_string(),
        }
    }
}

/// Reply of `GetServerInformation`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServerInformation {
    /// Product name of the server.
    pub name: String,
    /// For example "KDE", "GNOME" or "freedesktop.org".
    pub vendor: String,
    pub version: String,
    /// Version of the notification specification the server complies with.
    pub spec_version: String,
}

#[async_trait::async_trait]
pub trait Notifier {
    /// Shows `notification`, or replaces the one named by its `replaces_id`.
    ///
    /// With a `replaces_id` of 0 the server returns a fresh id greater than zero,
    /// otherwise it returns `replaces_id` back.
    async fn send(&self, notification: &Notification) -> Result<NotificationId>;

    /// Forcefully closes a notification and removes it from view.
    ///
    /// The server emits `NotificationClosed` in response, which is not waited for.
    /// Servers answer an empty reply when the id no longer exists, so closing an
    /// unknown id also returns `Ok(true)`.
    async fn close(&self, id: NotificationId) -> Result<bool>;

    /// Optional features of the server, in the order the server lists them.
    async fn capabilities(&self) -> Result<Vec<String>>;

    async fn server_information(&self) -> Result<ServerInformation>;
}

/// [`Notifier`] over an existing bus connection. Keeps no state between calls.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    proxy: NotificationsProxy<'static>,
}

impl NotificationClient {
    pub async fn new(conn: &Connection) -> Result<Self> {
        Self::with_destination(conn, &Destination::default()).await
    }

    pub async fn with_destination(conn: &Connection, destination: &Destination) -> Result<Self> {
        let proxy = NotificationsProxy::builder(conn)
            .destination(destination.service.clone())?
            .path(destination.path.clone())?
            .interface(destination.interface.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self { proxy })
    }
}

#[async_trait::async_trait]
impl Notifier for NotificationClient {
    async fn send(&self, notification: &Notification) -> Result<NotificationId> {
        log::debug!(
            "{NOTIFY}: summary: {:?}, replaces_id: {}",
            notification.summary,
            notification.replaces_id
        );

        self.proxy
            .notify(
                &notification.app_name,
                notification.replaces_id,
                &notification.app_icon,
                &notification.summary,
                &notification.body,
                &notification.actions,
                notification.hints.as_map(),
                notification.expire_timeout,
            )
            .await
            .map_err(|e| Error::from_call(NOTIFY, e))
    }

    async fn close(&self, id: NotificationId) -> Result<bool> {
        log::debug!("{CLOSE_NOTIFICATION}: id: {id}");

        self.proxy
            .close_notification(id)
            .await
            .map_err(|e| Error::from_call(CLOSE_NOTIFICATION, e))?;

        Ok(true)
    }

    async fn capabilities(&self) -> Result<Vec<String>> {
        log::debug!("{GET_CAPABILITIES}");

        self.proxy
            .get_capabilities()
            .await
            .map_err(|e| Error::from_call(GET_CAPABILITIES, e))
    }

    async fn server_information(&self) -> Result<ServerInformation> {
        log::debug!("{GET_SERVER_INFORMATION}");

        let reply = self
            .proxy
            .inner()
            .call_method(GET_SERVER_INFORMATION, &())
            .await
            .map_err(|e| Error::from_call(GET_SERVER_INFORMATION, e))?;

        let body = reply.body();
        if let Ok((name, vendor, version, spec_version)) =
            body.deserialize::<(String, String, String, String)>()
        {
            return Ok(ServerInformation {
                name,
                vendor,
                version,
                spec_version,
            });
        }

        // Keep whatever leading strings the reply does carry.
        let fields = match body.deserialize::<Structure<'_>>() {
            Ok(structure) => structure.into_fields(),
            Err(e) => {
                log::warn!("Error reading {GET_SERVER_INFORMATION} reply: {e}");
                Vec::new()
            }
        };
        let mut fields = fields.into_iter();

        let mut info = ServerInformation::default();
        let targets = [
            ("name", &mut info.name),
            ("vendor", &mut info.vendor),
            ("version", &mut info.version),
            ("spec_version", &mut info.spec_version),
        ];
        let mut missing = None;
        for (field, target) in targets {
            match fields.next() {
                Some(Value::Str(s)) => *target = s.to_string(),
                _ => {
                    missing = Some(field);
                    break;
                }
            }
        }

        let Some(missing) = missing else {
            return Err(Error::decode(
                GET_SERVER_INFORMATION,
                format!("expected 4 strings, got {}", 4 + fields.len()),
            ));
        };
        log::warn!("Error reading {GET_SERVER_INFORMATION} return values: missing {missing}");
        Err(Error::IncompleteServerInformation {
            partial: info,
            missing,
        })
    }
}

/// Sends one notification through a client built just for this call.
pub async fn send_notification(
    conn: &Connection,
    notification: &Notification,
) -> Result<NotificationId> {
    NotificationClient::new(conn)
        .await?
        .send(notification)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_defaults_to_freedesktop_names() {
        let destination = Destination::default();
        assert_eq!(destination.service, "org.freedesktop.Notifications");
        assert_eq!(destination.path, "/org/freedesktop/Notifications");
        assert_eq!(destination.interface, "org.freedesktop.Notifications");
    }

    #[test]
    fn partial_destination_fills_in_defaults() {
        let json = r#"{ "service": "org.example.Notifier" }"#;
        let destination: Destination = serde_json::from_str(json).unwrap();

        assert_eq!(
            destination,
            Destination {
                service: "org.example.Notifier".to_string(),
                ..Default::default()
            }
        );
    }
}
