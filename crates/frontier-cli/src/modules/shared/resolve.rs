/// Placeholder accepted wherever a user ID is expected.
pub(crate) const CREATED_USER: &str = "created";

/// Resolves a user-ID argument. `created` maps to the user made earlier in
/// this run, and resolves to `None` when there is none.
pub(crate) fn resolve_user_id(arg: &str, created: Option<&str>) -> Option<String> {
    let arg = arg.trim();
    if arg != CREATED_USER {
        return Some(arg.to_string());
    }
    created.map(str::to_string)
}
