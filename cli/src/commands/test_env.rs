use super::AppContext;
use markshelf::config::Config;
use markshelf::{BookmarkStore, NewBookmark, SqliteStore};

pub struct TestEnv {
    pub store: BookmarkStore<SqliteStore>,
    pub config: Config,
}

impl TestEnv {
    pub fn new() -> Self {
        let backend = SqliteStore::init_in_memory().expect("Failed to init in-memory DB");
        let store = BookmarkStore::open(backend).expect("Failed to open store");
        Self {
            store,
            config: Config::default(),
        }
    }

    pub fn ctx(&mut self) -> AppContext<'_> {
        AppContext {
            store: &mut self.store,
            config: &self.config,
        }
    }

    /// Add a bookmark directly through the store and return its id
    pub fn seed(&mut self, title: &str, url: &str, category: &str) -> String {
        self.store
            .add(NewBookmark {
                title: title.to_string(),
                url: url.to_string(),
                category: category.to_string(),
                description: String::new(),
            })
            .expect("Failed to seed bookmark")
            .id
    }
}
