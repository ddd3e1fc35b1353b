//! Portfolio reconciliation engine.
//!
//! Portfolio items are partitioned into buckets by their `service_id`; the
//! `None` partition is the "unassigned" bucket. Operations here compute the
//! next in-memory state for one bucket at a time and must never disturb any
//! other bucket: for every item outside the operated bucket, field values and
//! relative order are preserved exactly.
//!
//! All functions are pure and synchronous; committing a computed state to the
//! store is the caller's job (see `korin-db`). The one exception is `relink`,
//! whose plan is still pure but is persisted as an immediate single-row
//! update rather than with a bucket's bulk save.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::landing::{PortfolioItem, ServiceItem};
use crate::types::{new_entity_id, EntityId};

/// Route segment naming the unassigned bucket.
///
/// Service ids are uuids, so the literal can never collide with one.
pub const UNASSIGNED_SEGMENT: &str = "unassigned";

/// Identifies one partition of the portfolio item list.
///
/// An item belongs to exactly one bucket: `service_id` is a single nullable
/// scalar, and this sum type keeps that invariant visible in signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketKey {
    Unassigned,
    Assigned(EntityId),
}

impl BucketKey {
    /// Normalize a raw `service_id` value. Absent and blank both mean
    /// unassigned.
    pub fn from_service_id(service_id: Option<&str>) -> Self {
        match service_id {
            Some(id) if !id.trim().is_empty() => BucketKey::Assigned(id.to_string()),
            _ => BucketKey::Unassigned,
        }
    }

    /// Parse a bucket route segment: [`UNASSIGNED_SEGMENT`] or a service id.
    pub fn from_segment(segment: &str) -> Self {
        if segment == UNASSIGNED_SEGMENT {
            BucketKey::Unassigned
        } else {
            BucketKey::Assigned(segment.to_string())
        }
    }

    /// The `service_id` value items in this bucket carry.
    pub fn service_id(&self) -> Option<&str> {
        match self {
            BucketKey::Unassigned => None,
            BucketKey::Assigned(id) => Some(id),
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        BucketKey::from_service_id(item.service_id.as_deref()) == *self
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_id().unwrap_or(UNASSIGNED_SEGMENT))
    }
}

/// Direction of a single-step move within an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

// ---------------------------------------------------------------------------
// Bucket operations
// ---------------------------------------------------------------------------

/// Replace the contents of one bucket inside the full item list.
///
/// Every item currently in `bucket` is removed and `next_bucket_items`
/// (stamped with the bucket's `service_id`) is inserted as a contiguous block
/// at the position of the first removed item. If the bucket was empty the
/// block is appended after all existing items; if `next_bucket_items` is
/// empty the old block is simply removed. Items in every other bucket keep
/// their values and relative order.
pub fn replace_bucket(
    all_items: &[PortfolioItem],
    bucket: &BucketKey,
    next_bucket_items: Vec<PortfolioItem>,
) -> Vec<PortfolioItem> {
    let stamped: Vec<PortfolioItem> = next_bucket_items
        .into_iter()
        .map(|mut item| {
            item.service_id = bucket.service_id().map(str::to_string);
            item
        })
        .collect();

    let mut result = Vec::with_capacity(all_items.len() + stamped.len());
    match all_items.iter().position(|item| bucket.matches(item)) {
        None => {
            result.extend(all_items.iter().cloned());
            result.extend(stamped);
        }
        Some(first) => {
            for (index, item) in all_items.iter().enumerate() {
                if index == first {
                    result.extend(stamped.iter().cloned());
                }
                if !bucket.matches(item) {
                    result.push(item.clone());
                }
            }
        }
    }
    result
}

/// Swap the element at `index` with its neighbor in `direction`.
///
/// A move that would cross a list boundary (first item up, last item down)
/// or an out-of-range `index` returns the input unchanged rather than
/// failing. Operates on a single bucket's working list; other buckets are
/// never visible here.
pub fn reorder<T: Clone>(items: &[T], index: usize, direction: MoveDirection) -> Vec<T> {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1),
    };

    let mut next = items.to_vec();
    if let Some(target) = target {
        if index < items.len() && target < items.len() {
            next.swap(index, target);
        }
    }
    next
}

/// Sort order for an item appended to the end of `bucket`.
pub fn next_sort_order(all_items: &[PortfolioItem], bucket: &BucketKey) -> i64 {
    all_items
        .iter()
        .filter(|item| bucket.matches(item))
        .map(|item| item.sort_order)
        .max()
        .map_or(0, |max| max + 1)
}

/// Move one item to the end of another service's bucket.
///
/// Pure planning stage of the relink: validates that `target_service_id`
/// names an existing service and that the item exists, then returns the
/// updated full list plus the relinked item (restamped `service_id`,
/// `sort_order` past the destination bucket's maximum). On any error the
/// input is untouched and no plan is produced; the caller persists a
/// successful plan as an immediate single-row update.
pub fn relink(
    all_items: &[PortfolioItem],
    item_id: &str,
    target_service_id: &str,
    services: &[ServiceItem],
) -> Result<(Vec<PortfolioItem>, PortfolioItem), CoreError> {
    if !services.iter().any(|s| s.id == target_service_id) {
        return Err(CoreError::NotFound {
            entity: "Service",
            id: target_service_id.to_string(),
        });
    }
    let Some(position) = all_items.iter().position(|item| item.id == item_id) else {
        return Err(CoreError::NotFound {
            entity: "PortfolioItem",
            id: item_id.to_string(),
        });
    };

    let target_bucket = BucketKey::Assigned(target_service_id.to_string());
    let sort_order = next_sort_order(all_items, &target_bucket);

    let mut next = all_items.to_vec();
    let item = &mut next[position];
    item.service_id = Some(target_service_id.to_string());
    item.sort_order = sort_order;

    let relinked = next[position].clone();
    Ok((next, relinked))
}

/// A blank item for `bucket`, with a fresh id. Not appended to any list.
pub fn create_empty_item(bucket: &BucketKey) -> PortfolioItem {
    PortfolioItem {
        id: new_entity_id(),
        service_id: bucket.service_id().map(str::to_string),
        ..PortfolioItem::default()
    }
}

// ---------------------------------------------------------------------------
// Validation gate
// ---------------------------------------------------------------------------

/// Reject an item that is not fit to save. Checked when a single item is
/// committed into a bucket's working list and again before bulk save.
pub fn validate_item(item: &PortfolioItem) -> Result<(), CoreError> {
    if item.title.ja.trim().is_empty() {
        return Err(CoreError::Validation("title required".to_string()));
    }
    if item.image_url.trim().is_empty() {
        return Err(CoreError::Validation("image required".to_string()));
    }
    Ok(())
}

/// Trim an item's fields for persistence: localized fields get the standard
/// save normalization, urls are trimmed, and a blank link url becomes `None`.
pub fn normalize_item(item: PortfolioItem) -> PortfolioItem {
    PortfolioItem {
        title: item.title.normalize_for_save(),
        description: item.description.normalize_for_save(),
        image_url: item.image_url.trim().to_string(),
        link_url: item.link_url.and_then(|url| {
            let trimmed = url.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }),
        ..item
    }
}

/// Reject a service whose slug does not satisfy the slug rule.
pub fn validate_service(service: &ServiceItem) -> Result<(), CoreError> {
    crate::slug::validate_slug(&service.slug)
}
