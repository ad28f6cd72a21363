use desknotify::{Destination, Notification, NotificationClient, Notifier};
use std::io::{self, Write};

pub enum Event {
    Send(Box<Notification>),
    Close(u32),
    Capabilities,
    Info,
}

pub async fn emit(destination: &Destination, event: Event) -> anyhow::Result<()> {
    let conn = zbus::Connection::session().await?;
    let notify = NotificationClient::with_destination(&conn, destination).await?;
    let mut out = io::stdout().lock();

    match event {
        Event::Send(notification) => {
            let id = notify.send(&notification).await?;
            writeln!(out, "{id}")?;
        }
        Event::Close(id) => {
            notify.close(id).await?;
        }
        Event::Capabilities => {
            let capabilities = notify.capabilities().await?;
            for item in capabilities {
                writeln!(out, "{}", item)?;
            }
        }
        Event::Info => {
            let info = notify.server_information().await?;
            writeln!(out, "name: {}", info.name)?;
            writeln!(out, "vendor: {}", info.vendor)?;
            writeln!(out, "version: {}", info.version)?;
            writeln!(out, "spec_version: {}", info.spec_version)?;
        }
    }

    Ok(())
}
