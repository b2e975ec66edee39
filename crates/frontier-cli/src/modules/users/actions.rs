use rand::Rng;
use serde_json::{json, Map, Value};

use super::http::{
    create_user, delete_user, disable_user, enable_user, get_current_user, get_user,
    list_users_page, update_current_user, update_user,
};
use crate::modules::shared::{metadata_changes, metadata_text, or_na, value_text};
use crate::modules::system::ProbeContext;
use crate::modules::users::{CurrentPrincipal, User, UserPages, UserRequestBody};

pub(crate) const PAGE_SIZE: u32 = 10;
/// Hard stop for the ListUsers walk, whatever the server keeps returning.
pub(crate) const MAX_PAGES: u32 = 50;

const SAMPLE_SIZE: usize = 5;

/// Walks ListUsers from page 1 until a short or empty page, the page cap, or
/// after the first page when `paginate` is off.
pub(crate) async fn collect_users(
    ctx: &ProbeContext<'_>,
    paginate: bool,
) -> anyhow::Result<UserPages> {
    let mut pages = UserPages::default();
    let mut page_num = 1;
    while page_num <= MAX_PAGES {
        println!("Fetching page {page_num} (page size: {PAGE_SIZE})");
        let response = list_users_page(ctx, page_num, PAGE_SIZE).await?;
        pages.requests += 1;
        let fetched = response.users.len();
        println!(
            "   Page {page_num}: got {fetched} users (total in response: {})",
            value_text(&response.count)
        );
        if fetched == 0 {
            println!("   No more users found on page {page_num}");
            break;
        }
        pages.users.extend(response.users);
        pages.pages_fetched += 1;
        if fetched < PAGE_SIZE as usize {
            println!("   Reached end of results (got {fetched} < {PAGE_SIZE})");
            break;
        }
        if !paginate {
            break;
        }
        page_num += 1;
    }
    Ok(pages)
}

pub(crate) async fn probe_list_users(
    ctx: &ProbeContext<'_>,
    paginate: bool,
) -> anyhow::Result<UserPages> {
    println!("Testing ListUsers with pagination");
    let pages = collect_users(ctx, paginate).await?;

    println!();
    println!("PAGINATION SUMMARY:");
    println!("   Requests made: {}", pages.requests);
    println!("   Pages fetched: {}", pages.pages_fetched);
    println!("   Total users collected: {}", pages.users.len());
    println!("   Page size used: {PAGE_SIZE}");

    println!();
    println!("USER SAMPLE:");
    let total = pages.users.len();
    for (index, user) in pages.users.iter().enumerate().take(SAMPLE_SIZE) {
        print_user_line(index + 1, user);
    }
    if total > SAMPLE_SIZE * 2 {
        println!("   ... ({} users in between) ...", total - SAMPLE_SIZE * 2);
        for (index, user) in pages.users.iter().enumerate().skip(total - SAMPLE_SIZE) {
            print_user_line(index + 1, user);
        }
    } else {
        for (index, user) in pages.users.iter().enumerate().skip(SAMPLE_SIZE) {
            print_user_line(index + 1, user);
        }
    }
    Ok(pages)
}

fn print_user_line(position: usize, user: &User) {
    println!(
        "   {position}. {} ({}) - ID: {}",
        or_na(user.name.as_deref()),
        or_na(user.email.as_deref()),
        or_na(user.id.as_deref())
    );
}

pub(crate) fn print_user_details(user: &User) {
    println!("   User ID: {}", or_na(user.id.as_deref()));
    println!("   Email: {}", or_na(user.email.as_deref()));
    println!("   Name: {}", or_na(user.name.as_deref()));
    println!("   Title: {}", or_na(user.title.as_deref()));
    println!("   State: {}", or_na(user.state.as_deref()));
    if let Some(avatar) = user.avatar.as_deref().filter(|value| !value.is_empty()) {
        println!("   Avatar: {avatar}");
    }
    if let Some(metadata) = user.metadata.as_ref().filter(|value| !value.is_empty()) {
        println!("   Metadata: {}", metadata_text(metadata));
    }
    if let Some(created_at) = user.created_at.as_deref() {
        println!("   Created: {created_at}");
    }
    if let Some(updated_at) = user.updated_at.as_deref() {
        println!("   Updated: {updated_at}");
    }
}

fn metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub(crate) fn new_test_user_body(suffix: u32) -> UserRequestBody {
    UserRequestBody {
        email: format!("testuser{suffix}@example.com"),
        name: format!("test-user-{suffix}"),
        title: format!("Test User {suffix}"),
        avatar: None,
        metadata: metadata(json!({
            "source": "api_test",
            "test_run": true
        })),
    }
}

pub(crate) fn updated_user_body() -> UserRequestBody {
    UserRequestBody {
        email: "updated-user@test.com".to_string(),
        name: "updated-user-slug".to_string(),
        title: "Updated User via Connect RPC".to_string(),
        avatar: Some("updated-avatar.jpg".to_string()),
        metadata: metadata(json!({
            "department": "engineering",
            "role": "senior-developer",
            "updated": true
        })),
    }
}

pub(crate) fn updated_current_user_body(email: &str) -> UserRequestBody {
    UserRequestBody {
        email: email.to_string(),
        name: "updated-current-user-slug".to_string(),
        title: "Updated Current User via Connect RPC".to_string(),
        avatar: Some("updated-current-avatar.jpg".to_string()),
        metadata: metadata(json!({
            "department": "product",
            "role": "product-manager",
            "updated_via": "connect_rpc",
            "timestamp": "2024-01-01"
        })),
    }
}

fn print_comparison(before: &User, after: &UserRequestBody, email_note: &str) {
    println!();
    println!("BEFORE → AFTER COMPARISON:");
    println!(
        "   Title: '{}' → '{}'",
        or_na(before.title.as_deref()),
        after.title
    );
    println!(
        "   Email: '{}' → '{}'{email_note}",
        or_na(before.email.as_deref()),
        after.email
    );
    println!(
        "   Name: '{}' → '{}'",
        or_na(before.name.as_deref()),
        after.name
    );
    println!(
        "   Avatar: '{}' → '{}'",
        or_na(before.avatar.as_deref()),
        or_na(after.avatar.as_deref())
    );
    println!("   Metadata changes:");
    for line in metadata_changes(before.metadata.as_ref(), &after.metadata) {
        println!("      {line}");
    }
}

pub(crate) async fn probe_create_user(ctx: &ProbeContext<'_>) -> anyhow::Result<User> {
    let suffix = rand::thread_rng().gen_range(1000..=9999);
    let body = new_test_user_body(suffix);
    println!("Creating test user: {}", body.email);
    let user = create_user(ctx, body).await?;
    println!("   User created successfully!");
    print_user_details(&user);
    Ok(user)
}

pub(crate) async fn probe_get_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<User> {
    println!("Fetching user with ID: {id}");
    let user = get_user(ctx, id).await?;
    println!("   User fetched successfully!");
    print_user_details(&user);
    Ok(user)
}

pub(crate) async fn probe_get_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<Option<CurrentPrincipal>> {
    println!("Fetching current authenticated user");
    let principal = get_current_user(ctx).await?;
    match &principal {
        Some(CurrentPrincipal::User(user)) => {
            println!("   Current user fetched successfully!");
            print_user_details(user);
        }
        Some(CurrentPrincipal::ServiceUser(service_user)) => {
            println!("   Current service user fetched successfully!");
            println!("   Service User ID: {}", or_na(service_user.id.as_deref()));
            println!("   Email: {}", or_na(service_user.email.as_deref()));
            println!("   Title: {}", or_na(service_user.title.as_deref()));
            if let Some(metadata) = service_user.metadata.as_ref().filter(|value| !value.is_empty())
            {
                println!("   Metadata: {}", metadata_text(metadata));
            }
        }
        None => println!("   No user or service user found in response"),
    }
    Ok(principal)
}

pub(crate) async fn probe_update_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<User> {
    println!("Fetching current user data for comparison...");
    let before = match get_user(ctx, id).await {
        Ok(user) => Some(user),
        Err(err) => {
            println!("Could not fetch current user data ({err:#}); proceeding with update anyway");
            None
        }
    };

    let body = updated_user_body();
    println!("Updating user with ID: {id}");
    match before.as_ref() {
        Some(before) => print_comparison(before, &body, ""),
        None => println!("Update data: {}", serde_json::to_string(&body)?),
    }

    let user = update_user(ctx, id, body).await?;
    println!();
    println!("   User updated successfully!");
    print_user_details(&user);
    Ok(user)
}

pub(crate) async fn probe_update_current_user(ctx: &ProbeContext<'_>) -> anyhow::Result<User> {
    println!("Fetching current user data for comparison...");
    let principal = get_current_user(ctx)
        .await?
        .ok_or_else(|| anyhow::anyhow!("could not fetch current user; cannot update"))?;
    let email = principal
        .email()
        .filter(|email| !email.is_empty())
        .ok_or_else(|| anyhow::anyhow!("current user has no email; cannot update"))?
        .to_string();

    let body = updated_current_user_body(&email);
    println!("Updating current authenticated user");
    print_comparison(&principal.as_user_view(), &body, " (must match)");

    let user = update_current_user(ctx, body).await?;
    println!();
    println!("   Current user updated successfully!");
    print_user_details(&user);
    Ok(user)
}

pub(crate) async fn probe_enable_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<()> {
    println!("Enabling user: {id}");
    enable_user(ctx, id).await?;
    println!("   User enabled successfully!");
    println!("   User ID: {id}");
    Ok(())
}

pub(crate) async fn probe_disable_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<()> {
    println!("Disabling user: {id}");
    disable_user(ctx, id).await?;
    println!("   User disabled successfully!");
    println!("   User ID: {id}");
    Ok(())
}

pub(crate) async fn probe_delete_user(ctx: &ProbeContext<'_>, id: &str) -> anyhow::Result<()> {
    println!("Deleting user: {id}");
    let response = delete_user(ctx, id).await?;
    println!("   User deleted successfully!");
    println!("   Deleted User ID: {id}");
    println!("   Response: {response}");
    Ok(())
}
