// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

use crate::rules::{AccessPolicy, AccessRequest, Operation, OwnerScopedPolicy};
use crate::{
    CollectionPath, Document, DocumentId, DocumentPath, DocumentStore, Fields, Filter,
    ListenerRegistration, Query, QuerySnapshot, QuerySubscription, SetOptions, StoreError,
    WriteFields,
};

/// Makes the next `times` operations whose path starts with `path_prefix` fail with
/// `StoreError::Unavailable`.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultSpec {
    pub operation: Option<Operation>,
    pub path_prefix: String,
    pub times: usize,
}

impl FaultSpec {
    pub fn new(path_prefix: impl Into<String>) -> Self {
        Self {
            operation: None,
            path_prefix: path_prefix.into(),
            times: 1,
        }
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn times(mut self, times: usize) -> Self {
        self.times = times;
        self
    }

    fn matches(&self, operation: Operation, path: &str) -> bool {
        self.times > 0
            && self.operation.map(|op| op == operation).unwrap_or(true)
            && path.starts_with(&self.path_prefix)
    }
}

type SnapshotSender = mpsc::UnboundedSender<Result<QuerySnapshot, StoreError>>;

struct Listener {
    query: Query,
    sender: SnapshotSender,
    last: Vec<Document>,
}

#[derive(Default)]
struct State {
    documents: BTreeMap<DocumentPath, Fields>,
    listeners: HashMap<u64, Listener>,
    next_listener_id: u64,
    last_timestamp: i64,
    faults: Vec<FaultSpec>,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
}

/// A shared in-memory backend. Clients obtained through `client` see it through an access
/// policy, the store itself has unrestricted access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    shared: Arc<Shared>,
}

/// A `DocumentStore` bound to an authenticated user.
#[derive(Clone)]
pub struct InMemoryClient {
    shared: Arc<Shared>,
    auth: String,
    policy: Arc<dyn AccessPolicy>,
}

#[derive(Clone, Copy)]
enum Access<'a> {
    Privileged,
    Client {
        auth: &'a str,
        policy: &'a dyn AccessPolicy,
    },
}

struct Check<'a> {
    operation: Operation,
    path: &'a str,
    existing: Option<&'a Fields>,
    incoming: Option<&'a Fields>,
    filters: &'a [Filter],
}

impl Access<'_> {
    fn check(&self, check: Check<'_>) -> Result<(), StoreError> {
        let Access::Client { auth, policy } = self else {
            return Ok(());
        };

        let request = AccessRequest {
            auth,
            operation: check.operation,
            path: check.path,
            existing: check.existing,
            incoming: check.incoming,
            filters: check.filters,
        };

        if policy.allows(&request) {
            return Ok(());
        }

        debug!(
            "Denied {} on '{}' for '{}'.",
            check.operation, check.path, auth
        );
        Err(StoreError::PermissionDenied(check.path.to_string()))
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client authenticated as `auth`, restricted by the `OwnerScopedPolicy`.
    pub fn client(&self, auth: impl Into<String>) -> InMemoryClient {
        self.client_with_policy(auth, Arc::new(OwnerScopedPolicy::default()))
    }

    pub fn client_with_policy(
        &self,
        auth: impl Into<String>,
        policy: Arc<dyn AccessPolicy>,
    ) -> InMemoryClient {
        InMemoryClient {
            shared: self.shared.clone(),
            auth: auth.into(),
            policy,
        }
    }

    /// Writes `value` at `path`, replacing any existing document.
    pub fn seed(&self, path: &DocumentPath, value: Value) -> Result<(), StoreError> {
        let fields = WriteFields::from_serializable(&value)?;
        self.shared
            .set(Access::Privileged, path, fields, SetOptions::overwrite())
    }

    pub fn fail_next(&self, fault: FaultSpec) {
        self.shared.state.lock().faults.push(fault);
    }

    pub fn document(&self, path: &DocumentPath) -> Option<Fields> {
        self.shared.state.lock().documents.get(path).cloned()
    }

    pub fn documents_in(&self, collection: &CollectionPath) -> Vec<Document> {
        let state = self.shared.state.lock();
        Query::new(collection.clone()).execute(&collect_documents(&state.documents, collection))
    }

    pub fn listener_count(&self) -> usize {
        self.shared.state.lock().listeners.len()
    }
}

impl InMemoryClient {
    pub fn auth(&self) -> &str {
        &self.auth
    }

    fn access(&self) -> Access<'_> {
        Access::Client {
            auth: &self.auth,
            policy: self.policy.as_ref(),
        }
    }
}

impl Shared {
    fn get(&self, access: Access, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        path.validate()?;
        let mut state = self.state.lock();
        state.consume_fault(Operation::Read, path.as_str())?;

        let existing = state.documents.get(path);
        access.check(Check {
            operation: Operation::Read,
            path: path.as_str(),
            existing,
            incoming: None,
            filters: &[],
        })?;

        Ok(existing.map(|fields| Document::new(path.clone(), fields.clone())))
    }

    fn set(
        &self,
        access: Access,
        path: &DocumentPath,
        fields: WriteFields,
        options: SetOptions,
    ) -> Result<(), StoreError> {
        path.validate()?;
        let mut state = self.state.lock();
        let existing = state.documents.get(path).cloned();
        let operation = if existing.is_some() {
            Operation::Update
        } else {
            Operation::Create
        };
        state.consume_fault(operation, path.as_str())?;

        let mut incoming = match (&existing, options.merge) {
            (Some(existing), true) => existing.clone(),
            _ => Fields::new(),
        };
        let timestamp = state.next_timestamp();
        fields.apply_to(&mut incoming, timestamp);

        access.check(Check {
            operation,
            path: path.as_str(),
            existing: existing.as_ref(),
            incoming: Some(&incoming),
            filters: &[],
        })?;

        state.documents.insert(path.clone(), incoming);
        state.notify(&path.parent());
        Ok(())
    }

    fn update(
        &self,
        access: Access,
        path: &DocumentPath,
        fields: WriteFields,
    ) -> Result<(), StoreError> {
        path.validate()?;
        let mut state = self.state.lock();
        state.consume_fault(Operation::Update, path.as_str())?;

        let existing = state.documents.get(path).cloned();
        let Some(existing) = existing else {
            // Hide the existence of documents the client may not see.
            access.check(Check {
                operation: Operation::Update,
                path: path.as_str(),
                existing: None,
                incoming: None,
                filters: &[],
            })?;
            return Err(StoreError::NotFound(path.to_string()));
        };

        let mut incoming = existing.clone();
        let timestamp = state.next_timestamp();
        fields.apply_to(&mut incoming, timestamp);

        access.check(Check {
            operation: Operation::Update,
            path: path.as_str(),
            existing: Some(&existing),
            incoming: Some(&incoming),
            filters: &[],
        })?;

        state.documents.insert(path.clone(), incoming);
        state.notify(&path.parent());
        Ok(())
    }

    fn delete(&self, access: Access, path: &DocumentPath) -> Result<(), StoreError> {
        path.validate()?;
        let mut state = self.state.lock();
        state.consume_fault(Operation::Delete, path.as_str())?;

        access.check(Check {
            operation: Operation::Delete,
            path: path.as_str(),
            existing: state.documents.get(path),
            incoming: None,
            filters: &[],
        })?;

        if state.documents.remove(path).is_some() {
            state.notify(&path.parent());
        }
        Ok(())
    }

    fn add(
        &self,
        access: Access,
        collection: &CollectionPath,
        fields: WriteFields,
    ) -> Result<DocumentId, StoreError> {
        collection.validate()?;
        let id = DocumentId::from(uuid::Uuid::new_v4().simple().to_string()[..20].to_string());
        self.set(
            access,
            &collection.doc(id.as_str()),
            fields,
            SetOptions::overwrite(),
        )?;
        Ok(id)
    }

    fn query(&self, access: Access, query: &Query) -> Result<QuerySnapshot, StoreError> {
        query.collection.validate()?;
        let mut state = self.state.lock();
        state.check_list(access, query)?;

        let documents = query.execute(&collect_documents(&state.documents, &query.collection));
        Ok(QuerySnapshot::initial(documents))
    }

    fn subscribe(
        self: &Arc<Self>,
        access: Access,
        query: Query,
    ) -> Result<QuerySubscription, StoreError> {
        query.collection.validate()?;
        let mut state = self.state.lock();
        state.check_list(access, &query)?;

        let documents = query.execute(&collect_documents(&state.documents, &query.collection));
        let (sender, receiver) = mpsc::unbounded_channel();
        // The receiver is still alive at this point so the send can't fail.
        _ = sender.send(Ok(QuerySnapshot::initial(documents.clone())));

        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.insert(
            id,
            Listener {
                query,
                sender,
                last: documents,
            },
        );

        let shared: Weak<Shared> = Arc::downgrade(self);
        let registration = ListenerRegistration::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.state.lock().listeners.remove(&id);
            }
        });

        Ok(QuerySubscription::new(
            UnboundedReceiverStream::new(receiver),
            registration,
        ))
    }
}

impl State {
    fn consume_fault(&mut self, operation: Operation, path: &str) -> Result<(), StoreError> {
        let Some(idx) = self
            .faults
            .iter()
            .position(|f| f.matches(operation, path))
        else {
            return Ok(());
        };

        let fault = &mut self.faults[idx];
        fault.times -= 1;
        if fault.times == 0 {
            self.faults.remove(idx);
        }

        Err(StoreError::Unavailable(format!(
            "Injected failure for {operation} on '{path}'."
        )))
    }

    fn check_list(&mut self, access: Access, query: &Query) -> Result<(), StoreError> {
        self.consume_fault(Operation::List, query.collection.as_str())?;
        access.check(Check {
            operation: Operation::List,
            path: query.collection.as_str(),
            existing: None,
            incoming: None,
            filters: &query.filters,
        })
    }

    /// Returns the current time in microseconds, strictly greater than any value returned before.
    fn next_timestamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_micros();
        self.last_timestamp = now.max(self.last_timestamp + 1);
        self.last_timestamp
    }

    fn notify(&mut self, collection: &CollectionPath) {
        let State {
            documents,
            listeners,
            ..
        } = self;
        let documents = &*documents;

        let mut candidates = None;
        let mut closed = vec![];

        for (id, listener) in listeners.iter_mut() {
            if &listener.query.collection != collection {
                continue;
            }

            let candidates =
                candidates.get_or_insert_with(|| collect_documents(documents, collection));
            let snapshot =
                QuerySnapshot::diff(&listener.last, listener.query.execute(&*candidates));
            if !snapshot.has_changes() {
                continue;
            }

            listener.last = snapshot.documents.clone();
            if listener.sender.send(Ok(snapshot)).is_err() {
                closed.push(*id);
            }
        }

        for id in closed {
            listeners.remove(&id);
        }
    }
}

fn collect_documents(
    documents: &BTreeMap<DocumentPath, Fields>,
    collection: &CollectionPath,
) -> Vec<Document> {
    documents
        .iter()
        .filter(|(path, _)| &path.parent() == collection)
        .map(|(path, fields)| Document::new(path.clone(), fields.clone()))
        .collect()
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        self.shared.get(Access::Privileged, path)
    }

    async fn set(
        &self,
        path: &DocumentPath,
        fields: WriteFields,
        options: SetOptions,
    ) -> Result<(), StoreError> {
        self.shared.set(Access::Privileged, path, fields, options)
    }

    async fn update(&self, path: &DocumentPath, fields: WriteFields) -> Result<(), StoreError> {
        self.shared.update(Access::Privileged, path, fields)
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError> {
        self.shared.delete(Access::Privileged, path)
    }

    async fn add(
        &self,
        collection: &CollectionPath,
        fields: WriteFields,
    ) -> Result<DocumentId, StoreError> {
        self.shared.add(Access::Privileged, collection, fields)
    }

    async fn query(&self, query: &Query) -> Result<QuerySnapshot, StoreError> {
        self.shared.query(Access::Privileged, query)
    }

    fn subscribe(&self, query: Query) -> Result<QuerySubscription, StoreError> {
        self.shared.subscribe(Access::Privileged, query)
    }
}

#[async_trait]
impl DocumentStore for InMemoryClient {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        self.shared.get(self.access(), path)
    }

    async fn set(
        &self,
        path: &DocumentPath,
        fields: WriteFields,
        options: SetOptions,
    ) -> Result<(), StoreError> {
        self.shared.set(self.access(), path, fields, options)
    }

    async fn update(&self, path: &DocumentPath, fields: WriteFields) -> Result<(), StoreError> {
        self.shared.update(self.access(), path, fields)
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError> {
        self.shared.delete(self.access(), path)
    }

    async fn add(
        &self,
        collection: &CollectionPath,
        fields: WriteFields,
    ) -> Result<DocumentId, StoreError> {
        self.shared.add(self.access(), collection, fields)
    }

    async fn query(&self, query: &Query) -> Result<QuerySnapshot, StoreError> {
        self.shared.query(self.access(), query)
    }

    fn subscribe(&self, query: Query) -> Result<QuerySubscription, StoreError> {
        self.shared.subscribe(self.access(), query)
    }
}

impl Debug for InMemoryStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("InMemoryStore")
            .field("documents", &state.documents.len())
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl Debug for InMemoryClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryClient")
            .field("auth", &self.auth)
            .finish()
    }
}
