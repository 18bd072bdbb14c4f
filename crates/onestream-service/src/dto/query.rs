//! Stream listing parameters
//!
//! The listing accepts several spellings for the same parameter. They are
//! folded here, once, into a canonical [`StreamQuery`].

use std::collections::HashMap;

use onestream_common::PaginationConfig;
use onestream_core::value_objects::{SortDirection, SortField, StreamQuery, StreamSort};

use crate::services::error::{FieldErrors, ServiceError, ServiceResult};

const SEARCH_KEYS: [&str; 3] = ["search", "q", "filter[search]"];
const TYPE_KEYS: [&str; 3] = ["stream_type_id", "type", "filter[stream_type_id]"];

/// First non-empty value among `keys`, in order
fn first_present<'a>(params: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| params.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    first_present(params, &[key])
}

fn invalid(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

fn parse_sort(params: &HashMap<String, String>, errors: &mut FieldErrors) -> StreamSort {
    if let Some(sort) = non_empty(params, "sort") {
        return StreamSort::parse_signed(sort).unwrap_or_else(|| {
            invalid(errors, "sort", "The selected sort is invalid.".to_string());
            StreamSort::default()
        });
    }

    let Some(order_by) = non_empty(params, "order_by") else {
        return StreamSort::default();
    };

    let field = order_by.parse::<SortField>().map_err(|()| {
        invalid(errors, "order_by", "The selected order by is invalid.".to_string());
    });
    let direction = match non_empty(params, "order_dir") {
        Some(dir) => dir.parse::<SortDirection>().map_err(|()| {
            invalid(errors, "order_dir", "The selected order dir is invalid.".to_string());
        }),
        None => Ok(SortDirection::Asc),
    };

    match (field, direction) {
        (Ok(field), Ok(direction)) => StreamSort::new(field, direction),
        _ => StreamSort::default(),
    }
}

/// Positive integer or `default`
fn positive_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

/// Normalize a raw query map into a [`StreamQuery`].
///
/// Errors are collected for every offending parameter: a non-integer type
/// filter, a sort field outside the allow-list, or an unknown direction.
pub fn normalize_stream_query(
    params: &HashMap<String, String>,
    pagination: PaginationConfig,
) -> ServiceResult<StreamQuery> {
    let mut errors = FieldErrors::new();

    let search = first_present(params, &SEARCH_KEYS).map(str::to_string);

    let stream_type_id = first_present(params, &TYPE_KEYS).and_then(|value| {
        value
            .parse::<i64>()
            .map_err(|_| {
                invalid(
                    &mut errors,
                    "stream_type_id",
                    "The stream type id field must be an integer.".to_string(),
                );
            })
            .ok()
    });

    let sort = parse_sort(params, &mut errors);

    let per_page = positive_or(non_empty(params, "per_page"), pagination.default_per_page)
        .min(pagination.max_per_page);
    let page = positive_or(non_empty(params, "page"), 1);

    ServiceError::check(errors)?;

    Ok(StreamQuery {
        search,
        stream_type_id,
        sort,
        page,
        per_page,
    })
}
