use crate::ServerInformation;
use zbus::DBusError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bus could not be reached or rejected the call.
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    /// The notification server answered with an error reply.
    #[error("{method} failed with {name}: {description}")]
    Remote {
        method: &'static str,
        name: String,
        description: String,
    },

    /// The reply did not have the shape the protocol prescribes.
    #[error("Malformed {method} reply: {reason}")]
    Decode {
        method: &'static str,
        reason: String,
    },

    /// `GetServerInformation` replied with fewer than four strings. Fields that were
    /// decoded before the fault are kept in `partial`.
    #[error("Incomplete GetServerInformation reply, missing {missing}")]
    IncompleteServerInformation {
        partial: ServerInformation,
        missing: &'static str,
    },
}

impl Error {
    /// Sorts a failed call into transport, remote or decode faults.
    pub(crate) fn from_call(method: &'static str, e: zbus::Error) -> Self {
        match e {
            zbus::Error::MethodError(name, description, _) => Self::Remote {
                method,
                name: name.to_string(),
                description: description.unwrap_or_default(),
            },
            zbus::Error::FDO(e) => Self::Remote {
                method,
                name: e.name().to_string(),
                description: e.description().unwrap_or_default().to_string(),
            },
            zbus::Error::Variant(e) => Self::decode(method, e.to_string()),
            zbus::Error::InvalidReply => Self::decode(method, "invalid reply".to_string()),
            e => Self::Bus(e),
        }
    }

    pub(crate) fn decode(method: &'static str, reason: String) -> Self {
        log::warn!("Error decoding {method} reply: {reason}");
        Self::Decode { method, reason }
    }

    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::IncompleteServerInformation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_errors_are_decode_faults() {
        let e = Error::from_call(
            "Notify",
            zbus::Error::Variant(zbus::zvariant::Error::IncorrectType),
        );
        assert!(e.is_decode());
        match e {
            Error::Decode { method, .. } => assert_eq!(method, "Notify"),
            e => panic!("unexpected {e:?}"),
        }

        let e = Error::from_call("GetCapabilities", zbus::Error::InvalidReply);
        match e {
            Error::Decode { method, .. } => assert_eq!(method, "GetCapabilities"),
            e => panic!("unexpected {e:?}"),
        }
    }

    #[test]
    fn other_errors_stay_bus_faults() {
        let e = Error::from_call("CloseNotification", zbus::Error::Failure("gone".into()));
        match e {
            Error::Bus(zbus::Error::Failure(reason)) => assert_eq!(reason, "gone"),
            e => panic!("unexpected {e:?}"),
        }
    }

    #[test]
    fn fdo_errors_are_remote_faults() {
        let e = Error::from_call(
            "CloseNotification",
            zbus::Error::FDO(Box::new(zbus::fdo::Error::Failed("no such id".into()))),
        );
        match e {
            Error::Remote {
                method,
                name,
                description,
            } => {
                assert_eq!(method, "CloseNotification");
                assert_eq!(name, "org.freedesktop.DBus.Error.Failed");
                assert_eq!(description, "no such id");
            }
            e => panic!("unexpected {e:?}"),
        }
    }
}
