use super::http::list_service_users;
use crate::modules::serviceusers::ServiceUser;
use crate::modules::shared::{metadata_text, or_na};
use crate::modules::system::ProbeContext;

const SHOWN: usize = 5;

pub(crate) async fn probe_list_service_users(
    ctx: &ProbeContext<'_>,
    org_id: &str,
) -> anyhow::Result<Vec<ServiceUser>> {
    println!("Listing service users for organization: {org_id}");
    let service_users = list_service_users(ctx, org_id).await?.serviceusers;
    println!("Total Service Users: {}", service_users.len());
    if service_users.is_empty() {
        println!("   No service users found");
        return Ok(service_users);
    }

    println!("Service Users:");
    for (index, service_user) in service_users.iter().take(SHOWN).enumerate() {
        println!("   {}. ID: {}", index + 1, or_na(service_user.id.as_deref()));
        println!("      Title: {}", or_na(service_user.title.as_deref()));
        println!("      Org ID: {}", or_na(service_user.org_id.as_deref()));
        println!("      State: {}", or_na(service_user.state.as_deref()));
        if let Some(metadata) = service_user.metadata.as_ref().filter(|value| !value.is_empty()) {
            println!("      Metadata: {}", metadata_text(metadata));
        }
        println!();
    }
    if service_users.len() > SHOWN {
        println!("   ... and {} more service users", service_users.len() - SHOWN);
    }
    Ok(service_users)
}
