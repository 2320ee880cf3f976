//! ID resolver module
//!
//! Resolves user-typed job references to full UUIDs against a snapshot of
//! the store, so short unambiguous prefixes can stand in for full IDs.

use anyhow::{Result, anyhow};
use jobby_store::JobService;
use uuid::Uuid;

use crate::types::IdOrPrefix;

/// Resolve a job ID or prefix to a full UUID
///
/// A full UUID is returned as-is, even when no job has it, so the store
/// reports the missing job itself.
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
pub fn resolve_job_id(service: &JobService, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    if let IdOrPrefix::Full(uuid) = id_or_prefix {
        return Ok(*uuid);
    }

    let matches: Vec<Uuid> = service
        .get_all()
        .iter()
        .map(|job| job.id)
        .filter(|id| id_or_prefix.matches(*id))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!(
            "No job found with ID starting with '{}'",
            id_or_prefix
        )),
        [id] => Ok(*id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|id| id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                id_or_prefix,
                ids.join(", ")
            ))
        }
    }
}

/// Parse and resolve a job reference in one step
pub fn resolve(service: &JobService, input: &str) -> Result<Uuid> {
    let id_or_prefix = IdOrPrefix::parse(input)?;
    resolve_job_id(service, &id_or_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobby_store::CreateJob;

    #[test]
    fn test_resolve_unique_prefix() {
        let service = JobService::new();
        let job = service.create(CreateJob::new("Engineer", "Acme")).unwrap();
        let prefix = &job.id.to_string()[..8];

        assert_eq!(resolve(&service, prefix).unwrap(), job.id);
    }

    #[test]
    fn test_resolve_full_id_passes_through() {
        let service = JobService::new();
        let id = Uuid::new_v4();

        assert_eq!(resolve(&service, &id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_resolve_unknown_prefix() {
        let service = JobService::new();
        let job = service.create(CreateJob::new("Engineer", "Acme")).unwrap();

        let first = job.id.to_string().chars().next().unwrap();
        let other = if first == 'a' { "b" } else { "a" };

        let err = resolve(&service, other).unwrap_err();
        assert!(err.to_string().contains("No job found"));
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let service = JobService::new();
        service.create(CreateJob::new("A", "Acme")).unwrap();
        service.create(CreateJob::new("B", "Acme")).unwrap();

        // every ID starts with the empty prefix
        let err = resolve_job_id(&service, &IdOrPrefix::Prefix(String::new())).unwrap_err();
        assert!(err.to_string().contains("Ambiguous"));
    }
}
