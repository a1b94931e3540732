//! Descriptor codec: declared snapshot ↔ ticket form entity.
//!
//! `decode` builds the entity to send to the remote API from the declared
//! fields; `encode` commits a remote-returned entity back into the
//! snapshot, establishing it as the new source of truth.

use crate::error::Result;
use crate::form::TicketForm;
use crate::ident;
use crate::schema;
use crate::store::ConfigStore;

/// Decode the declared snapshot into a ticket form entity.
///
/// Fields without an explicit declared value keep their zero value, except
/// booleans with a schema default. The declared `name` and `display_name`
/// populate both the rendered and raw entity fields, since the caller only
/// ever declares one value. Each declared field feeds exactly one entity
/// field.
///
/// # Errors
/// Fails only when the store's identifier is non-empty and malformed.
pub fn decode(store: &impl ConfigStore) -> Result<TicketForm> {
    let mut form = TicketForm::default();

    let id = store.id();
    if !id.is_empty() {
        form.id = Some(ident::parse_id(id)?);
    }

    if let Some(url) = store.get_string(schema::URL) {
        form.url = url;
    }

    if let Some(name) = store.get_string(schema::NAME) {
        form.raw_name = name.clone();
        form.name = name;
    }

    if let Some(display_name) = store.get_string(schema::DISPLAY_NAME) {
        form.raw_display_name = display_name.clone();
        form.display_name = display_name;
    }

    form.position = store.get_i64(schema::POSITION).unwrap_or(0);
    form.active = store
        .get_bool(schema::ACTIVE)
        .unwrap_or_else(|| schema::bool_default(schema::ACTIVE));
    form.end_user_visible = store
        .get_bool(schema::END_USER_VISIBLE)
        .unwrap_or_else(|| schema::bool_default(schema::END_USER_VISIBLE));
    form.default = store
        .get_bool(schema::DEFAULT)
        .unwrap_or_else(|| schema::bool_default(schema::DEFAULT));
    form.in_all_brands = store
        .get_bool(schema::IN_ALL_BRANDS)
        .unwrap_or_else(|| schema::bool_default(schema::IN_ALL_BRANDS));

    if let Some(field_ids) = store.get_i64_list(schema::TICKET_FIELD_IDS) {
        form.ticket_field_ids = field_ids;
    }

    if let Some(brand_ids) = store.get_i64_set(schema::RESTRICTED_BRAND_IDS) {
        form.restricted_brand_ids = brand_ids;
    }

    Ok(form)
}

/// Encode a ticket form entity into the declared snapshot.
///
/// Full replace: every declared field is overwritten from the entity,
/// including remote-computed ones. The store's identifier is not touched;
/// committing it is the lifecycle's job.
///
/// # Errors
/// Fails with `CoreError::Encode` on the first write the store rejects.
pub fn encode(form: &TicketForm, store: &mut impl ConfigStore) -> Result<()> {
    store.set_string(schema::URL, &form.url)?;
    store.set_string(schema::NAME, &form.name)?;
    store.set_string(schema::DISPLAY_NAME, &form.display_name)?;
    store.set_i64(schema::POSITION, form.position)?;
    store.set_bool(schema::ACTIVE, form.active)?;
    store.set_bool(schema::END_USER_VISIBLE, form.end_user_visible)?;
    store.set_bool(schema::DEFAULT, form.default)?;
    store.set_i64_list(schema::TICKET_FIELD_IDS, &form.ticket_field_ids)?;
    store.set_bool(schema::IN_ALL_BRANDS, form.in_all_brands)?;
    store.set_i64_set(schema::RESTRICTED_BRAND_IDS, &form.restricted_brand_ids)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn populated_store() -> MemoryStore {
        let mut store = MemoryStore::with_id("42");
        store.set_string(schema::URL, "https://example.zendesk.com/api/v2/ticket_forms/42.json").unwrap();
        store.set_string(schema::NAME, "Support").unwrap();
        store.set_string(schema::DISPLAY_NAME, "Support requests").unwrap();
        store.set_i64(schema::POSITION, 2).unwrap();
        store.set_bool(schema::ACTIVE, false).unwrap();
        store.set_bool(schema::END_USER_VISIBLE, true).unwrap();
        store.set_bool(schema::DEFAULT, true).unwrap();
        store.set_i64_list(schema::TICKET_FIELD_IDS, &[5, 1, 3]).unwrap();
        store.set_bool(schema::IN_ALL_BRANDS, false).unwrap();
        store
            .set_i64_set(schema::RESTRICTED_BRAND_IDS, &BTreeSet::from([9, 4]))
            .unwrap();
        store
    }

    #[test]
    fn test_decode_populated_store() {
        let form = decode(&populated_store()).unwrap();

        assert_eq!(form.id, Some(42));
        assert_eq!(form.name, "Support");
        assert_eq!(form.raw_name, "Support");
        assert_eq!(form.display_name, "Support requests");
        assert_eq!(form.raw_display_name, "Support requests");
        assert_eq!(form.position, 2);
        assert!(!form.active);
        assert!(form.end_user_visible);
        assert!(form.default);
        assert!(!form.in_all_brands);
    }

    #[test]
    fn test_decode_empty_store_uses_defaults() {
        let form = decode(&MemoryStore::new()).unwrap();

        assert_eq!(form.id, None);
        assert_eq!(form.name, "");
        assert_eq!(form.position, 0);
        assert!(form.active);
        assert!(form.in_all_brands);
        assert!(!form.end_user_visible);
        assert!(form.ticket_field_ids.is_empty());
        assert!(form.restricted_brand_ids.is_empty());
    }

    #[test]
    fn test_decode_malformed_id_fails() {
        let store = MemoryStore::with_id("abc");
        assert!(matches!(
            decode(&store),
            Err(CoreError::IdParse { value, .. }) if value == "abc"
        ));
    }

    #[test]
    fn test_decode_preserves_field_order() {
        let mut store = MemoryStore::new();
        store.set_i64_list(schema::TICKET_FIELD_IDS, &[5, 1, 3]).unwrap();

        let form = decode(&store).unwrap();
        assert_eq!(form.ticket_field_ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_decode_keeps_fields_independent() {
        let mut store = MemoryStore::new();
        store.set_i64_list(schema::TICKET_FIELD_IDS, &[1, 2]).unwrap();
        store
            .set_i64_set(schema::RESTRICTED_BRAND_IDS, &BTreeSet::from([9, 4]))
            .unwrap();

        let form = decode(&store).unwrap();
        assert_eq!(form.ticket_field_ids, vec![1, 2]);
        assert_eq!(form.restricted_brand_ids, BTreeSet::from([4, 9]));
    }

    #[test]
    fn test_round_trip() {
        let store = populated_store();
        let form = decode(&store).unwrap();

        let mut rewritten = MemoryStore::with_id("42");
        encode(&form, &mut rewritten).unwrap();

        assert_eq!(rewritten, store);
    }

    #[test]
    fn test_encode_is_full_replace() {
        let form = TicketForm::new("Renamed").with_ticket_field_ids([7]);

        let mut store = populated_store();
        encode(&form, &mut store).unwrap();

        assert_eq!(store.get_string(schema::NAME), Some("Renamed".to_string()));
        assert_eq!(store.get_string(schema::URL), Some(String::new()));
        assert_eq!(store.get_i64_list(schema::TICKET_FIELD_IDS), Some(vec![7]));
        assert_eq!(store.get_i64_set(schema::RESTRICTED_BRAND_IDS), Some(BTreeSet::new()));
        // Identifier commit is not encode's job.
        assert_eq!(store.id(), "42");
    }

    #[test]
    fn test_encode_surfaces_store_rejection() {
        struct RejectAll;

        impl ConfigStore for RejectAll {
            fn id(&self) -> &str {
                ""
            }
            fn set_id(&mut self, _id: &str) {}
            fn get_string(&self, _field: &str) -> Option<String> {
                None
            }
            fn get_i64(&self, _field: &str) -> Option<i64> {
                None
            }
            fn get_bool(&self, _field: &str) -> Option<bool> {
                None
            }
            fn get_i64_list(&self, _field: &str) -> Option<Vec<i64>> {
                None
            }
            fn get_i64_set(&self, _field: &str) -> Option<BTreeSet<i64>> {
                None
            }
            fn set_string(&mut self, field: &str, _value: &str) -> Result<()> {
                Err(CoreError::Encode {
                    field: field.to_string(),
                    reason: "read-only".to_string(),
                })
            }
            fn set_i64(&mut self, _field: &str, _value: i64) -> Result<()> {
                unreachable!("encode aborts on the first rejected write")
            }
            fn set_bool(&mut self, _field: &str, _value: bool) -> Result<()> {
                unreachable!("encode aborts on the first rejected write")
            }
            fn set_i64_list(&mut self, _field: &str, _value: &[i64]) -> Result<()> {
                unreachable!("encode aborts on the first rejected write")
            }
            fn set_i64_set(&mut self, _field: &str, _value: &BTreeSet<i64>) -> Result<()> {
                unreachable!("encode aborts on the first rejected write")
            }
        }

        let err = encode(&TicketForm::new("Support"), &mut RejectAll).unwrap_err();
        assert!(matches!(err, CoreError::Encode { field, .. } if field == "url"));
    }
}
