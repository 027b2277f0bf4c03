// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Access rules evaluated by the in-memory driver for every client operation.

use serde_json::Value;

use crate::{Fields, Filter, FilterOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Operation {
    Read,
    List,
    Create,
    Update,
    Delete,
}

pub struct AccessRequest<'a> {
    /// Id of the authenticated user performing the operation.
    pub auth: &'a str,
    pub operation: Operation,
    /// Document path, or collection path for `Operation::List`.
    pub path: &'a str,
    /// The stored document, if it exists.
    pub existing: Option<&'a Fields>,
    /// The document as it would look after the write.
    pub incoming: Option<&'a Fields>,
    /// Filters of the query for `Operation::List`.
    pub filters: &'a [Filter],
}

pub trait AccessPolicy: Send + Sync {
    fn allows(&self, request: &AccessRequest<'_>) -> bool;
}

/// Grants everything. Meant for seeding and administrative access.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllPolicy;

impl AccessPolicy for AllowAllPolicy {
    fn allows(&self, _request: &AccessRequest<'_>) -> bool {
        true
    }
}

/// Every user owns the subtree below their profile document and nothing else. A shared inbox
/// collection accepts documents from anyone but only lets the addressed recipient see or delete
/// them.
///
/// - `{private_root}/{uid}` is readable by everyone, writable by `uid`.
/// - `{private_root}/{uid}/**` is readable and writable by `uid` only.
/// - `{inbox}/{id}` can be created by anyone. Reads, updates and deletes require
///   `{recipient_field} == auth`, listing requires an equality filter on that field.
#[derive(Debug, Clone)]
pub struct OwnerScopedPolicy {
    pub private_root: String,
    pub inbox: String,
    pub recipient_field: String,
}

impl Default for OwnerScopedPolicy {
    fn default() -> Self {
        Self {
            private_root: "users".to_string(),
            inbox: "notifications".to_string(),
            recipient_field: "recipientId".to_string(),
        }
    }
}

impl AccessPolicy for OwnerScopedPolicy {
    fn allows(&self, request: &AccessRequest<'_>) -> bool {
        let segments = request.path.split('/').collect::<Vec<_>>();
        let Some(root) = segments.first() else {
            return false;
        };

        if *root == self.private_root {
            return match (segments.len(), request.operation) {
                // Profile listing and profile reads are public.
                (1, Operation::List) | (2, Operation::Read) => true,
                (1, _) => false,
                _ => segments[1] == request.auth,
            };
        }

        if *root == self.inbox {
            let is_recipient = |fields: Option<&Fields>| {
                fields.and_then(|f| f.get(&self.recipient_field))
                    == Some(&Value::from(request.auth))
            };

            return match request.operation {
                Operation::Create => segments.len() == 2,
                Operation::Read | Operation::Delete => {
                    // Reading or deleting a missing document leaks nothing.
                    request.existing.is_none() || is_recipient(request.existing)
                }
                Operation::Update => {
                    is_recipient(request.existing) && is_recipient(request.incoming)
                }
                Operation::List => request.filters.iter().any(|f| {
                    f.op == FilterOp::Eq
                        && f.field == self.recipient_field
                        && f.value == Value::from(request.auth)
                }),
            };
        }

        false
    }
}
