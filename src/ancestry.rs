//! Bounded traversal of the inheritance graph.
//!
//! The transitive capability query walks an entity's declared parents
//! depth-first, in declaration order, short-circuiting on the first match.
//! The walk is explicitly bounded: entities on the current descent path are
//! tracked to report cycles instead of recursing unboundedly, and entities
//! already exhausted are skipped so diamond-shaped graphs (a shared
//! ancestor reachable along two paths) are visited once, not flagged.

use std::collections::HashSet;

use crate::errors::RoleError;

/// Depth-first search over a parent graph.
///
/// `matches` is the per-entity test applied before descending (identity and
/// direct does-relation checks live in the caller); `parents_of` supplies an
/// entity's declared parents in order. Unknown entities simply have no
/// parents.
///
/// Returns `Ok(true)` on the first match, `Ok(false)` when the graph is
/// exhausted, and `Err(CyclicInheritance)` when the walk re-enters an
/// entity already on the current path.
pub(crate) fn search<P, M>(start: &str, parents_of: P, matches: M) -> Result<bool, RoleError>
where
    P: Fn(&str) -> Vec<String>,
    M: Fn(&str) -> bool,
{
    let mut path: Vec<String> = Vec::new();
    let mut exhausted: HashSet<String> = HashSet::new();
    visit(start, &parents_of, &matches, &mut path, &mut exhausted)
}

fn visit<P, M>(
    name: &str,
    parents_of: &P,
    matches: &M,
    path: &mut Vec<String>,
    exhausted: &mut HashSet<String>,
) -> Result<bool, RoleError>
where
    P: Fn(&str) -> Vec<String>,
    M: Fn(&str) -> bool,
{
    if path.iter().any(|seen| seen == name) {
        let mut cycle = path.clone();
        cycle.push(name.to_string());
        return Err(RoleError::CyclicInheritance { path: cycle });
    }
    if exhausted.contains(name) {
        return Ok(false);
    }
    if matches(name) {
        return Ok(true);
    }

    path.push(name.to_string());
    for parent in parents_of(name) {
        if visit(&parent, parents_of, matches, path, exhausted)? {
            return Ok(true);
        }
    }
    path.pop();

    exhausted.insert(name.to_string());
    Ok(false)
}
