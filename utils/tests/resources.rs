use std::collections::BTreeSet;

use i18n::{en_us, zh_cn};

fn keys(resource: &str) -> BTreeSet<&str> {
    resource
        .lines()
        .filter_map(|line| line.split_once(" = "))
        .map(|(key, _)| key.trim())
        .collect()
}

const PAIRS: [(&str, &str, &str); 10] = [
    ("NAV", en_us::NAV, zh_cn::NAV),
    ("FOOTER", en_us::FOOTER, zh_cn::FOOTER),
    ("HOME", en_us::HOME, zh_cn::HOME),
    ("LOGIN", en_us::LOGIN, zh_cn::LOGIN),
    ("REGISTER", en_us::REGISTER, zh_cn::REGISTER),
    ("FRIENDS", en_us::FRIENDS, zh_cn::FRIENDS),
    ("PROFILE", en_us::PROFILE, zh_cn::PROFILE),
    ("TERMS", en_us::TERMS, zh_cn::TERMS),
    ("PRIVACY", en_us::PRIVACY, zh_cn::PRIVACY),
    ("NOT_FOUND", en_us::NOT_FOUND, zh_cn::NOT_FOUND),
];

#[test]
fn every_language_defines_the_same_messages() {
    for (name, en, zh) in PAIRS {
        assert_eq!(keys(en), keys(zh), "{name} differs between languages");
    }
}

#[test]
fn every_resource_parses() {
    for (_, en, zh) in PAIRS {
        for res in [en, zh] {
            let bundle = utils::create_bundle(res);
            for key in keys(res) {
                assert!(bundle.has_message(key), "missing {key}");
            }
        }
    }
}

#[test]
fn placeables_are_filled() {
    let bundle = utils::create_bundle(en_us::FRIENDS);
    assert_eq!(
        utils::tr!(bundle, "record", "wins" => 3, "losses" => 1),
        "Wins: 3, Losses: 1"
    );
    let bundle = utils::create_bundle(zh_cn::FOOTER);
    assert_eq!(
        utils::tr!(bundle, "rights", "year" => "2026"),
        "© 2026 Transcendence"
    );
}
