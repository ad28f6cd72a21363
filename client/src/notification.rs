use std::collections::HashMap;
use zbus::zvariant::Value;

/// Id assigned by the server to a notification. Always greater than zero.
pub type NotificationId = u32;

#[derive(PartialEq, Eq, Default, Debug, Clone, Copy)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Low => 0,
            Urgency::Normal => 1,
            Urgency::Critical => 2,
        }
    }
}

/// How long the server keeps a notification on screen.
#[derive(PartialEq, Eq, Default, Debug, Clone, Copy)]
pub enum Timeout {
    /// Left to the server's settings, which may depend on the kind of notification.
    #[default]
    ServerDefault,
    Never,
    /// Values above `i32::MAX` are clamped. `Milliseconds(0)` is sent as 0, which
    /// servers read as [`Timeout::Never`].
    Milliseconds(u32),
}

impl From<Timeout> for i32 {
    fn from(timeout: Timeout) -> Self {
        match timeout {
            Timeout::ServerDefault => -1,
            Timeout::Never => 0,
            Timeout::Milliseconds(ms) => i32::try_from(ms).unwrap_or(i32::MAX),
        }
    }
}

/// Optional hints for the server, sent as `a{sv}`.
///
/// Servers are free to ignore any hint. Values keep their D-Bus type, so a hint
/// inserted as a byte arrives as a byte.
#[derive(Debug, Default, PartialEq)]
pub struct Hints(HashMap<String, Value<'static>>);

impl Hints {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value<'static>>) {
        self.0.insert(key.into(), value.into());
    }

    fn insert_string(&mut self, key: &str, value: impl Into<String>) {
        let value: String = value.into();
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value<'static>> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, Value<'static>> {
        &self.0
    }

    pub fn urgency(&mut self, urgency: Urgency) {
        self.insert("urgency", u8::from(urgency));
    }

    pub fn category(&mut self, category: impl Into<String>) {
        self.insert_string("category", category);
    }

    pub fn desktop_entry(&mut self, desktop_entry: impl Into<String>) {
        self.insert_string("desktop-entry", desktop_entry);
    }

    /// Either an icon name or a `file://` URI.
    pub fn image_path(&mut self, image: impl Into<String>) {
        self.insert_string("image-path", image);
    }

    pub fn sound_file(&mut self, path: impl Into<String>) {
        self.insert_string("sound-file", path);
    }

    pub fn sound_name(&mut self, name: impl Into<String>) {
        self.insert_string("sound-name", name);
    }

    pub fn suppress_sound(&mut self, suppress: bool) {
        self.insert("suppress-sound", suppress);
    }

    pub fn transient(&mut self, transient: bool) {
        self.insert("transient", transient);
    }

    pub fn resident(&mut self, resident: bool) {
        self.insert("resident", resident);
    }

    pub fn action_icons(&mut self, action_icons: bool) {
        self.insert("action-icons", action_icons);
    }

    /// Progress, 0 to 100.
    pub fn value(&mut self, value: i32) {
        self.insert("value", value);
    }

    pub fn position(&mut self, x: i32, y: i32) {
        self.insert("x", x);
        self.insert("y", y);
    }
}

/// Everything `Notify` needs. Built per call and not kept by the client.
#[derive(Debug, PartialEq)]
pub struct Notification {
    pub app_name: String,
    /// 0 creates a new notification, anything else replaces the one with that id.
    pub replaces_id: NotificationId,
    /// Icon name or empty for no icon.
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    /// Interleaved pairs: even elements are action ids, odd ones their labels.
    pub actions: Vec<String>,
    pub hints: Hints,
    /// Milliseconds. -1 leaves it to the server, 0 never expires.
    pub expire_timeout: i32,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            replaces_id: 0,
            app_icon: String::new(),
            summary: String::new(),
            body: String::new(),
            actions: Vec::new(),
            hints: Hints::default(),
            expire_timeout: Timeout::ServerDefault.into(),
        }
    }
}

impl Notification {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn replaces(mut self, id: NotificationId) -> Self {
        self.replaces_id = id;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.app_icon = icon.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn action(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.actions.push(id.into());
        self.actions.push(label.into());
        self
    }

    pub fn hint(mut self, key: impl Into<String>, value: impl Into<Value<'static>>) -> Self {
        self.hints.insert(key, value);
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.hints.urgency(urgency);
        self
    }

    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.expire_timeout = timeout.into();
        self
    }

    /// Action id/label pairs as the server will see them.
    pub fn action_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions
            .chunks_exact(2)
            .map(|action| (action[0].as_str(), action[1].as_str()))
    }
}
