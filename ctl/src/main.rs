mod notify;
use clap::{Parser, Subcommand, ValueEnum};
use desknotify::{Destination, Timeout, Urgency, OBJECT_PATH, SERVICE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: NotifyCommand,

    #[arg(long, default_value = SERVICE, help = "Bus name of the notification server")]
    service: String,

    #[arg(long, default_value = OBJECT_PATH, help = "Object path of the notification server")]
    path: String,

    #[arg(short, long, help = "Log every call")]
    verbose: bool,
}

#[derive(Subcommand)]
enum NotifyCommand {
    #[command(about = "Send a notification and print its id")]
    Send {
        summary: String,

        body: Option<String>,

        #[arg(short, long, default_value = "desknotifyctl")]
        app_name: String,

        #[arg(short, long, help = "Icon name or file:// URI")]
        icon: Option<String>,

        #[arg(short, long, help = "Id of the notification to replace")]
        replaces: Option<u32>,

        #[arg(
            short,
            long,
            help = "Milliseconds before the notification expires, 0 to never expire"
        )]
        timeout: Option<u32>,

        #[arg(short, long, value_enum)]
        urgency: Option<UrgencyArg>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(
            long = "action",
            value_name = "ID:LABEL",
            help = "Add an action button"
        )]
        actions: Vec<String>,

        #[arg(long, help = "Do not keep the notification in history")]
        transient: bool,
    },

    #[command(about = "Close a notification by id")]
    Close { id: u32 },

    #[command(about = "List the optional features of the server")]
    Capabilities,

    #[command(about = "Show name, vendor and version of the server")]
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum UrgencyArg {
    Low,
    Normal,
    Critical,
}

impl From<UrgencyArg> for Urgency {
    fn from(urgency: UrgencyArg) -> Self {
        match urgency {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::Normal => Urgency::Normal,
            UrgencyArg::Critical => Urgency::Critical,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        })
        .init();

    let destination = Destination {
        service: cli.service,
        path: cli.path,
        ..Default::default()
    };

    let event = match cli.command {
        NotifyCommand::Send {
            summary,
            body,
            app_name,
            icon,
            replaces,
            timeout,
            urgency,
            category,
            actions,
            transient,
        } => {
            let mut notification = desknotify::Notification::new(summary)
                .app_name(app_name)
                .body(body.unwrap_or_default())
                .icon(icon.unwrap_or_default())
                .replaces(replaces.unwrap_or_default())
                .timeout(match timeout {
                    None => Timeout::ServerDefault,
                    Some(0) => Timeout::Never,
                    Some(ms) => Timeout::Milliseconds(ms),
                });

            for action in &actions {
                let Some((id, label)) = action.split_once(':') else {
                    anyhow::bail!("Invalid action {action:?}, expected ID:LABEL");
                };
                notification = notification.action(id, label);
            }
            if let Some(urgency) = urgency {
                notification.hints.urgency(urgency.into());
            }
            if let Some(category) = category {
                notification.hints.category(category);
            }
            if transient {
                notification.hints.transient(true);
            }

            notify::Event::Send(Box::new(notification))
        }
        NotifyCommand::Close { id } => notify::Event::Close(id),
        NotifyCommand::Capabilities => notify::Event::Capabilities,
        NotifyCommand::Info => notify::Event::Info,
    };

    notify::emit(&destination, event).await?;

    Ok(())
}
