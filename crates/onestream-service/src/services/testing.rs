//! In-memory repositories for service tests

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use onestream_common::{hash_password, JwtService, PaginationConfig};
use onestream_core::entities::{NewStream, NewUser, Stream, StreamPatch, StreamType, User, UserUpdate};
use onestream_core::traits::{RepoResult, StreamRepository, StreamTypeRepository, UserRepository};
use onestream_core::value_objects::{Page, SortDirection, SortField, StreamId, StreamQuery};
use onestream_core::DomainError;
use onestream_db::PgPool;

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) const TEST_SECRET: &str = "test-secret-key-for-service-tests";

struct StoredStream {
    stream: Stream,
    type_id: Option<i64>,
    deleted: bool,
}

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct State {
    next_id: i64,
    types: Vec<StreamType>,
    streams: Vec<StoredStream>,
    users: Vec<StoredUser>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn find_type(&self, id: Option<i64>) -> Option<StreamType> {
        id.and_then(|id| self.types.iter().find(|t| t.id == id).cloned())
    }

    fn resolved(&self, stored: &StoredStream) -> Stream {
        let mut stream = stored.stream.clone();
        stream.stream_type = self.find_type(stored.type_id);
        stream
    }

    fn live_stream(&mut self, id: StreamId) -> Option<&mut StoredStream> {
        self.streams
            .iter_mut()
            .find(|s| s.stream.id == id && !s.deleted)
    }
}

/// One store implementing every repository, so joins and set-null behave
/// like the database
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

fn compare(a: &Stream, b: &Stream, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::TokensPrice => a.tokens_price.cmp(&b.tokens_price),
        SortField::DateExpiration => a.date_expiration.cmp(&b.date_expiration),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl StreamRepository for InMemoryStore {
    async fn find_by_id(&self, id: StreamId) -> RepoResult<Option<Stream>> {
        let state = self.state();
        Ok(state
            .streams
            .iter()
            .find(|s| s.stream.id == id && !s.deleted)
            .map(|s| state.resolved(s)))
    }

    async fn list(&self, query: &StreamQuery) -> RepoResult<Page<Stream>> {
        let state = self.state();
        let term = query.search.as_deref().map(str::to_lowercase);

        let mut matching: Vec<Stream> = state
            .streams
            .iter()
            .filter(|s| !s.deleted)
            .filter(|s| query.stream_type_id.is_none() || s.type_id == query.stream_type_id)
            .filter(|s| {
                term.as_deref().map_or(true, |term| {
                    s.stream.title.to_lowercase().contains(term)
                        || s.stream
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(term))
                })
            })
            .map(|s| state.resolved(s))
            .collect();

        matching.sort_by(|a, b| {
            let ord = compare(a, b, query.sort.field);
            let ord = match query.sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            ord.then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();
        Ok(Page::new(items, total, query.page, query.per_page))
    }

    async fn create(&self, new: &NewStream) -> RepoResult<Stream> {
        let mut state = self.state();
        if new.stream_type_id.is_some() && state.find_type(new.stream_type_id).is_none() {
            return Err(DomainError::invalid_field(
                "stream_type_id",
                "The selected stream type does not exist.",
            ));
        }
        let now = Utc::now();
        let stored = StoredStream {
            stream: Stream {
                id: new.id,
                title: new.title.clone(),
                description: new.description.clone(),
                tokens_price: new.tokens_price,
                stream_type: None,
                date_expiration: new.date_expiration,
                created_at: now,
                updated_at: now,
            },
            type_id: new.stream_type_id,
            deleted: false,
        };
        let stream = state.resolved(&stored);
        state.streams.push(stored);
        Ok(stream)
    }

    async fn update(&self, id: StreamId, patch: &StreamPatch) -> RepoResult<Stream> {
        let mut state = self.state();
        let stream_type = patch.stream_type_id.and_then(|id| state.find_type(id));
        let stored = state.live_stream(id).ok_or(DomainError::StreamNotFound(id))?;

        patch.apply_to(&mut stored.stream, stream_type);
        if let Some(type_id) = patch.stream_type_id {
            stored.type_id = type_id;
        }

        let stored = state
            .streams
            .iter()
            .find(|s| s.stream.id == id)
            .ok_or(DomainError::StreamNotFound(id))?;
        Ok(state.resolved(stored))
    }

    async fn delete(&self, id: StreamId) -> RepoResult<()> {
        let mut state = self.state();
        let stored = state.live_stream(id).ok_or(DomainError::StreamNotFound(id))?;
        stored.deleted = true;
        Ok(())
    }
}

#[async_trait]
impl StreamTypeRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<StreamType>> {
        Ok(self.state().types.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<StreamType>> {
        Ok(self.state().find_type(Some(id)))
    }

    async fn name_exists(&self, name: &str, except_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .state()
            .types
            .iter()
            .any(|t| t.name == name && Some(t.id) != except_id))
    }

    async fn create(&self, name: &str) -> RepoResult<StreamType> {
        let mut state = self.state();
        let stream_type = StreamType::new(state.next_id(), name.to_string());
        state.types.push(stream_type.clone());
        Ok(stream_type)
    }

    async fn update(&self, id: i64, name: &str) -> RepoResult<StreamType> {
        let mut state = self.state();
        let stream_type = state
            .types
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DomainError::StreamTypeNotFound(id))?;
        stream_type.name = name.to_string();
        stream_type.updated_at = Utc::now();
        Ok(stream_type.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.types.len();
        state.types.retain(|t| t.id != id);
        if state.types.len() == before {
            return Err(DomainError::StreamTypeNotFound(id));
        }
        for stored in &mut state.streams {
            if stored.type_id == Some(id) {
                stored.type_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.state().users.iter().map(|u| u.user.clone()).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.user.email.eq_ignore_ascii_case(email))
            .map(|u| u.user.clone()))
    }

    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .state()
            .users
            .iter()
            .any(|u| u.user.email.eq_ignore_ascii_case(email) && Some(u.user.id) != except_id))
    }

    async fn create(&self, new: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.state();
        let now = Utc::now();
        let user = User {
            id: state.next_id(),
            name: new.name.clone(),
            email: new.email.clone(),
            email_verified_at: None,
            created_at: now,
            updated_at: now,
        };
        state.users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(user)
    }

    async fn update(
        &self,
        id: i64,
        update: &UserUpdate,
        password_hash: Option<&str>,
    ) -> RepoResult<User> {
        let mut state = self.state();
        let stored = state
            .users
            .iter_mut()
            .find(|u| u.user.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        stored.user.name.clone_from(&update.name);
        stored.user.email.clone_from(&update.email);
        stored.user.updated_at = Utc::now();
        if let Some(hash) = password_hash {
            stored.password_hash = hash.to_string();
        }
        Ok(stored.user.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let before = state.users.len();
        state.users.retain(|u| u.user.id != id);
        if state.users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.password_hash.clone()))
    }
}

/// Service context over a fresh in-memory store
pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    store: Arc<InMemoryStore>,
}

impl TestContext {
    /// Must be called inside a Tokio runtime; the lazy pool never connects
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .stream_repo(store.clone())
            .stream_type_repo(store.clone())
            .user_repo(store.clone())
            .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
            .pagination(PaginationConfig::default())
            .build()
            .unwrap();
        Self { ctx, store }
    }

    /// Insert a stream type directly, returning its id
    pub fn stream_type(&self, name: &str) -> i64 {
        let mut state = self.store.state();
        let id = state.next_id();
        state.types.push(StreamType::new(id, name.to_string()));
        id
    }

    /// Insert a user with a real Argon2 hash, returning its id
    pub fn user(&self, name: &str, email: &str, password: &str) -> i64 {
        let hash = hash_password(password).unwrap();
        let mut state = self.store.state();
        let id = state.next_id();
        let now = Utc::now();
        state.users.push(StoredUser {
            user: User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                email_verified_at: Some(now),
                created_at: now,
                updated_at: now,
            },
            password_hash: hash,
        });
        id
    }

    /// Whether the row still exists, soft-deleted or not
    pub fn is_retained(&self, id: StreamId) -> bool {
        self.store.state().streams.iter().any(|s| s.stream.id == id)
    }

    pub fn password_hash(&self, user_id: i64) -> Option<String> {
        self.store
            .state()
            .users
            .iter()
            .find(|u| u.user.id == user_id)
            .map(|u| u.password_hash.clone())
    }
}
