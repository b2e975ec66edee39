use super::http::{list_projects_by_current_user, list_projects_by_user};
use crate::modules::projects::{ListProjectsResponse, Project};
use crate::modules::shared::{or_na, value_text};
use crate::modules::system::ProbeContext;

fn print_projects(heading: &str, projects: &[Project]) {
    println!("   {heading}:");
    for (index, project) in projects.iter().enumerate() {
        println!("      {}. ID: {}", index + 1, or_na(project.id.as_deref()));
        println!("         Name: {}", or_na(project.name.as_deref()));
        println!("         Title: {}", or_na(project.title.as_deref()));
        println!("         Organization ID: {}", or_na(project.org_id.as_deref()));
        println!("         Members Count: {}", value_text(&project.members_count));
        if let Some(created_at) = project.created_at.as_deref() {
            println!("         Created: {created_at}");
        }
    }
}

pub(crate) async fn probe_list_projects_by_user(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<ListProjectsResponse> {
    println!("Listing projects for user: {user_id}");
    let response = list_projects_by_user(ctx, user_id).await?;
    println!("   Found {} projects for user", response.projects.len());
    if response.projects.is_empty() {
        println!("   No projects found for user");
    } else {
        print_projects("User Projects", &response.projects);
    }
    Ok(response)
}

pub(crate) async fn probe_list_projects_by_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListProjectsResponse> {
    println!("Listing projects for current user");
    let response = list_projects_by_current_user(ctx).await?;
    let count = if response.count.is_null() {
        "0".to_string()
    } else {
        value_text(&response.count)
    };
    println!(
        "   Found {} projects for current user (Total count: {count})",
        response.projects.len()
    );
    if response.projects.is_empty() {
        println!("   No projects found for current user");
    } else {
        print_projects("Current User Projects", &response.projects);
    }
    if !response.access_pairs.is_empty() {
        println!("   Access Pairs:");
        for (index, pair) in response.access_pairs.iter().enumerate() {
            println!("      {}. Project ID: {}", index + 1, or_na(pair.project_id.as_deref()));
            println!("         Permissions: {}", pair.permissions.join(", "));
        }
    }
    Ok(response)
}
