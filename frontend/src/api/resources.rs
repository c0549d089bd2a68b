use crate::api::api_url;

/// Route groups mounted under the admin router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminResource {
    Bots,
    Intents,
    Entities,
    Train,
    Test,
    Integrations,
    ChatLogs,
}

impl AdminResource {
    /// Every resource, in the order the backend mounts them.
    pub const ALL: [AdminResource; 7] = [
        AdminResource::Bots,
        AdminResource::Intents,
        AdminResource::Entities,
        AdminResource::Train,
        AdminResource::Test,
        AdminResource::Integrations,
        AdminResource::ChatLogs,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AdminResource::Bots => "bots",
            AdminResource::Intents => "intents",
            AdminResource::Entities => "entities",
            AdminResource::Train => "train",
            AdminResource::Test => "test",
            AdminResource::Integrations => "integrations",
            AdminResource::ChatLogs => "chatlogs",
        }
    }

    pub fn url(&self) -> String {
        api_url(self.path())
    }

    /// URL of a single item; `id` is percent-encoded.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.url(), urlencoding::encode(id))
    }
}

impl std::fmt::Display for AdminResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
