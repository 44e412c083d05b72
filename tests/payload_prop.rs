use create_favicon::constants::FAVICON_BASE64;
use create_favicon::payload::{decode_payload, embedded_payload};
use proptest::prelude::*;

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 1..4)
        .prop_map(|ws| ws.into_iter().collect())
}

proptest! {
    #[test]
    fn whitespace_anywhere_is_ignored(
        inserts in prop::collection::vec((0usize..FAVICON_BASE64.len(), whitespace()), 0..20)
    ) {
        let mut text = FAVICON_BASE64.to_string();
        let mut inserts = inserts;
        // insert back to front so earlier offsets stay valid
        inserts.sort_by(|a, b| b.0.cmp(&a.0));
        for (at, ws) in inserts {
            text.insert_str(at, &ws);
        }
        prop_assert_eq!(decode_payload(&text).unwrap(), embedded_payload().unwrap());
    }

    #[test]
    fn foreign_symbol_always_fails(
        at in 0usize..FAVICON_BASE64.len(),
        symbol in prop::sample::select(vec!['!', '#', '*', '-', '_', '.', '~', '@'])
    ) {
        let mut text = FAVICON_BASE64.to_string();
        text.insert(at, symbol);
        prop_assert!(decode_payload(&text).unwrap_err().is_decode());
    }
}
