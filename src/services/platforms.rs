use futures::future::join_all;

use crate::{
    models::{ContentItem, PlatformInfo},
    services::discovery::DiscoveryService,
};

/// Display name of a streaming provider id
pub fn platform_name(id: u32) -> String {
    match id {
        8 => "Netflix".to_string(),
        9 => "Amazon Prime Video".to_string(),
        337 => "Disney Plus".to_string(),
        384 => "HBO Max".to_string(),
        15 => "Hulu".to_string(),
        other => format!("Platform {}", other),
    }
}

/// Platform entries for the ids a user asked for, without logos
pub fn named_platforms(ids: &[u32]) -> Vec<PlatformInfo> {
    ids.iter()
        .map(|id| PlatformInfo {
            id: *id,
            name: platform_name(*id),
            logo_url: None,
        })
        .collect()
}

/// Fills in where each item can be watched.
///
/// Lookups run concurrently, one per item. A failed lookup leaves that item
/// with no platforms. Items left without platforms get `fallback` instead.
pub async fn attach_availability(
    discovery: &dyn DiscoveryService,
    items: &mut [ContentItem],
    region: &str,
    fallback: &[PlatformInfo],
) {
    let lookups = items
        .iter()
        .map(|item| discovery.availability(item.media_type, item.id, region));
    let results = join_all(lookups).await;

    let mut failures = 0;
    for (item, result) in items.iter_mut().zip(results) {
        let platforms = match result {
            Ok(platforms) => platforms,
            Err(e) => {
                failures += 1;
                tracing::warn!(
                    error = %e,
                    content_id = item.id,
                    media_type = %item.media_type,
                    region = %region,
                    "Availability lookup failed"
                );
                Vec::new()
            }
        };

        item.platforms = if platforms.is_empty() {
            fallback.to_vec()
        } else {
            platforms
        };
    }

    if failures > 0 {
        tracing::info!(
            failures = failures,
            total = items.len(),
            "Availability enrichment completed with failures"
        );
    }
}
