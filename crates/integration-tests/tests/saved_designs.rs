//! Saving, listing, loading and deleting designs through the customizer.

#![allow(clippy::unwrap_used)]

use solecraft_client::{ClientError, CustomizerError};
use solecraft_core::{HexColor, Material, Part, SneakerConfiguration, UserId};
use solecraft_integration_tests::TestServer;

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

#[tokio::test]
async fn test_saved_design_listed_first_with_tags_and_snapshot() {
    let server = TestServer::start().await;
    let session = server.customizer();

    session.load_default_product().await.unwrap();
    session.save_design("Morning Run", ["daily"]).await.unwrap();

    session.set_part_color(Part::Upper, hex("#ffd166")).unwrap();
    session.set_part_color(Part::Laces, hex("#06d6a0")).unwrap();
    let at_save = session.configuration();

    let saved = session
        .save_design("Beach Day", ["summer", "bright"])
        .await
        .unwrap();

    // Later edits must not leak into the stored snapshot.
    session.set_part_color(Part::Upper, hex("#118ab2")).unwrap();

    let designs = session.list_designs(None).await.unwrap();
    assert_eq!(designs.len(), 2);

    let newest = designs.first().unwrap();
    assert_eq!(newest.id, saved.id);
    assert_eq!(newest.name.as_str(), "Beach Day");
    assert_eq!(newest.tags.as_slice(), ["summer", "bright"]);
    assert_eq!(newest.configuration, at_save);
    assert_eq!(Some(newest.product_id), session.store().product_id());
}

#[tokio::test]
async fn test_save_without_product_uses_default_product() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let saved = session.save_design("Untitled", ["x"]).await.unwrap();
    let default = session.api().default_product().await.unwrap();

    assert_eq!(saved.product_id, default.id);
}

#[tokio::test]
async fn test_query_filters_by_name_and_tag() {
    let server = TestServer::start().await;
    let session = server.customizer();

    session.save_design("Beach Day", ["summer"]).await.unwrap();
    session.save_design("Night Out", ["Stealth"]).await.unwrap();

    let by_tag = session.list_designs(Some("stealth")).await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag.first().unwrap().name.as_str(), "Night Out");

    let by_name = session.list_designs(Some("BEACH")).await.unwrap();
    assert_eq!(by_name.len(), 1);

    assert_eq!(session.list_designs(Some("  ")).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_load_design_restores_configuration_and_product() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let catalogue = session.api().list_products().await.unwrap();
    let court = catalogue.iter().find(|p| p.name == "Court Classic").unwrap();

    session.set_part_color(Part::Sole, hex("#ef476f")).unwrap();
    session.set_material(Material::Shiny);
    let design = session
        .api()
        .save_design(&solecraft_core::NewDesign {
            product_id: Some(court.id),
            name: solecraft_core::DesignName::parse("Court Pop").unwrap(),
            configuration: session.configuration(),
            tags: ["pop"].into_iter().collect(),
        })
        .await
        .unwrap();

    session.reset();
    assert_eq!(session.configuration(), SneakerConfiguration::builtin_default());

    session.load_design(&design).await.unwrap();

    let store = session.store();
    assert_eq!(store.configuration(), &design.configuration);
    assert_eq!(store.product_id(), Some(court.id));
    assert_eq!(store.product_name(), "Court Classic");
    assert_eq!(store.base_price(), court.base_price);
}

#[tokio::test]
async fn test_load_design_with_unknown_product_leaves_store_unchanged() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let mut design = session.save_design("Orphan", ["x"]).await.unwrap();
    design.product_id = solecraft_core::ProductId::generate();
    design.configuration.sole = hex("#ffffff");

    let before = session.store();
    let err = session.load_design(&design).await.unwrap_err();

    assert!(matches!(err, CustomizerError::Client(ClientError::NotFound(_))));
    assert_eq!(session.store(), before);
}

#[tokio::test]
async fn test_delete_succeeds_exactly_once() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let keep = session.save_design("Keep", ["a"]).await.unwrap();
    let gone = session.save_design("Gone", ["b"]).await.unwrap();

    session.delete_design(gone.id).await.unwrap();

    let remaining: Vec<_> = session
        .list_designs(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(remaining, [keep.id]);

    let err = session.delete_design(gone.id).await.unwrap_err();
    assert!(matches!(err, CustomizerError::Client(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_designs_are_private_to_their_owner() {
    let server = TestServer::start().await;
    let alice = server.customizer_for(UserId::generate());
    let bob = server.customizer_for(UserId::generate());

    let design = alice.save_design("Alice's", ["mine"]).await.unwrap();

    assert!(bob.list_designs(None).await.unwrap().is_empty());

    let err = bob.delete_design(design.id).await.unwrap_err();
    assert!(matches!(err, CustomizerError::Client(ClientError::NotFound(_))));
    assert_eq!(alice.list_designs(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_name_never_reaches_the_studio() {
    let server = TestServer::start().await;
    let session = server.customizer();

    let err = session.save_design("   ", ["x"]).await.unwrap_err();
    assert!(matches!(err, CustomizerError::Name(_)));
    assert!(session.list_designs(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contrast_guard_applies_to_manual_picks_only() {
    let server = TestServer::start().await;
    let session = server.customizer();

    session.set_part_color(Part::Logo, HexColor::black()).unwrap();
    let err = session
        .set_part_color(Part::Upper, HexColor::black())
        .unwrap_err();
    assert!(matches!(err, CustomizerError::Contrast(_)));

    // The same pair arriving from the AI designer is applied as is.
    server.generator.push_reply(
        r##"{"sole":"#000000","upper":"#000000","laces":"#000000","logo":"#000000"}"##,
    );
    session.ask_ai_designer("all black").await.unwrap();
    assert!(session.configuration().upper.is_black());
    assert!(session.configuration().logo.is_black());
}
