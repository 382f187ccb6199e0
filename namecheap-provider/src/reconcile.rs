//! Merge a single described host record into a full record set.
//!
//! Records are keyed by `(name, type)`. Only the first match is acted upon:
//! later duplicates with the same key are left untouched, even on delete.

use crate::types::{DomainHostsResult, Host, NEW_HOST_ID};

/// What [`reconcile`] did to the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The record at this position was updated in place.
    Updated(usize),
    /// The record was appended at this position.
    Inserted(usize),
    /// The record at this position was blanked out.
    Deleted(usize),
    /// Delete requested but no record matched.
    Unchanged,
}

/// Merge `incoming` into `existing`.
///
/// - match + delete: the record is replaced by an all-empty [`Host`], keeping
///   its position. Blank records carry no host-id and are left out of the
///   upload, which makes the registrar drop them.
/// - match + update: `address` and `is_active` are always overwritten;
///   `mx_pref`, `ttl` and `friendly_name` only when the incoming value is
///   non-empty. `host_id`, `associated_app_title` and `is_ddns_enabled` are
///   never touched.
/// - no match + update: `incoming` is appended with host-id `"1"`.
/// - no match + delete: nothing happens.
pub fn reconcile(
    existing: &mut DomainHostsResult,
    incoming: Host,
    delete: bool,
) -> ReconcileOutcome {
    let position = existing
        .hosts
        .iter()
        .position(|h| h.matches(&incoming.name, &incoming.record_type));

    match (position, delete) {
        (Some(index), true) => {
            log::debug!("[reconcile] Deleting host #{index}: {:?}", existing.hosts[index]);
            existing.hosts[index] = Host::default();
            ReconcileOutcome::Deleted(index)
        }
        (Some(index), false) => {
            let host = &mut existing.hosts[index];
            log::debug!("[reconcile] Updating host #{index}: {host:?}");
            host.address = incoming.address;
            if !incoming.mx_pref.is_empty() {
                host.mx_pref = incoming.mx_pref;
            }
            if !incoming.ttl.is_empty() {
                host.ttl = incoming.ttl;
            }
            if !incoming.friendly_name.is_empty() {
                host.friendly_name = incoming.friendly_name;
            }
            host.is_active = incoming.is_active;
            ReconcileOutcome::Updated(index)
        }
        (None, false) => {
            existing.hosts.push(Host {
                host_id: NEW_HOST_ID.to_string(),
                ..incoming
            });
            ReconcileOutcome::Inserted(existing.hosts.len() - 1)
        }
        (None, true) => {
            log::debug!(
                "[reconcile] No {} record named '{}', nothing to delete",
                incoming.record_type,
                incoming.name
            );
            ReconcileOutcome::Unchanged
        }
    }
}
