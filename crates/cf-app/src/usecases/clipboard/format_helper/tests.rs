use super::ClipboardTextFormatHelper;
use async_trait::async_trait;
use cf_core::ports::{ClipboardPlatformPort, StagingStorePort};
use cf_core::{
    ClipboardError, ClipboardFormat, ClipboardPayload, ClipboardResult, OutgoingClipboardPackage,
    StreamReference,
};
use mockall::mock;
use mockall::predicate::eq;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mock! {
    pub Platform {}

    #[async_trait]
    impl ClipboardPlatformPort for Platform {
        async fn has_format(&self, format: ClipboardFormat) -> ClipboardResult<bool>;
        async fn get_payload(&self, format: ClipboardFormat) -> ClipboardResult<ClipboardPayload>;
        async fn set_package(&self, package: OutgoingClipboardPackage) -> ClipboardResult<()>;
        async fn flush(&self) -> ClipboardResult<()>;
    }
}

mock! {
    pub Staging {}

    #[async_trait]
    impl StagingStorePort for Staging {
        async fn stage(&self, data: &[u8]) -> anyhow::Result<PathBuf>;
        async fn discard(&self, path: &Path) -> anyhow::Result<()>;
    }
}

fn helper(platform: MockPlatform, staging: MockStaging) -> ClipboardTextFormatHelper {
    ClipboardTextFormatHelper::new(Arc::new(platform), Arc::new(staging))
}

fn advertised(platform: &mut MockPlatform, format: ClipboardFormat, present: bool) {
    platform
        .expect_has_format()
        .with(eq(format))
        .times(1)
        .returning(move |_| Ok(present));
}

#[tokio::test]
async fn null_inputs_are_rejected_without_touching_the_clipboard() {
    // No expectations: any platform or staging call panics.
    let uc = helper(MockPlatform::new(), MockStaging::new());

    let err = uc.set_text(None).await.unwrap_err();
    assert!(matches!(err, ClipboardError::InvalidArgument("text")));

    let err = uc.set_rtf(None).await.unwrap_err();
    assert!(matches!(err, ClipboardError::InvalidArgument("rtf")));

    let err = uc.set_raw_html(None).await.unwrap_err();
    assert!(matches!(err, ClipboardError::InvalidArgument("html")));

    let err = uc.set_image(None).await.unwrap_err();
    assert!(matches!(err, ClipboardError::InvalidArgument("image")));
}

#[tokio::test]
async fn reads_return_none_when_format_is_not_advertised() {
    let mut platform = MockPlatform::new();
    for format in ClipboardFormat::ALL {
        advertised(&mut platform, format, false);
    }
    platform.expect_get_payload().never();

    let uc = helper(platform, MockStaging::new());

    assert_eq!(uc.get_text().await.unwrap(), None);
    assert_eq!(uc.get_rtf().await.unwrap(), None);
    assert_eq!(uc.get_raw_html().await.unwrap(), None);
    assert_eq!(uc.get_image().await.unwrap(), None);
}

#[tokio::test]
async fn empty_rtf_and_html_read_as_absent() {
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Rtf, true);
    advertised(&mut platform, ClipboardFormat::Html, true);
    platform
        .expect_get_payload()
        .returning(|format| Err(ClipboardError::EmptyFormat(format)));

    let uc = helper(platform, MockStaging::new());

    assert_eq!(uc.get_rtf().await.unwrap(), None);
    assert_eq!(uc.get_raw_html().await.unwrap(), None);
}

#[tokio::test]
async fn empty_string_rtf_reads_as_absent() {
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Rtf, true);
    platform
        .expect_get_payload()
        .with(eq(ClipboardFormat::Rtf))
        .returning(|_| Ok(ClipboardPayload::Rtf(String::new())));

    let uc = helper(platform, MockStaging::new());

    assert_eq!(uc.get_rtf().await.unwrap(), None);
}

#[tokio::test]
async fn empty_text_is_returned_as_empty_string() {
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Text, true);
    platform
        .expect_get_payload()
        .with(eq(ClipboardFormat::Text))
        .returning(|_| Ok(ClipboardPayload::Text(String::new())));

    let uc = helper(platform, MockStaging::new());

    assert_eq!(uc.get_text().await.unwrap(), Some(String::new()));
}

#[tokio::test]
async fn empty_format_on_text_propagates() {
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Text, true);
    platform
        .expect_get_payload()
        .returning(|format| Err(ClipboardError::EmptyFormat(format)));

    let uc = helper(platform, MockStaging::new());

    let err = uc.get_text().await.unwrap_err();
    assert!(matches!(err, ClipboardError::EmptyFormat(ClipboardFormat::Text)));
}

#[tokio::test]
async fn platform_faults_propagate_from_reads() {
    let mut platform = MockPlatform::new();
    platform
        .expect_has_format()
        .returning(|_| Err(ClipboardError::Unavailable("no display".into())));

    let uc = helper(platform, MockStaging::new());

    assert!(matches!(
        uc.get_rtf().await,
        Err(ClipboardError::Unavailable(_))
    ));
}

#[tokio::test]
async fn mismatched_payload_kind_is_an_error() {
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Rtf, true);
    platform
        .expect_get_payload()
        .returning(|_| Ok(ClipboardPayload::Text("plain".into())));

    let uc = helper(platform, MockStaging::new());

    let err = uc.get_rtf().await.unwrap_err();
    assert!(matches!(
        err,
        ClipboardError::UnexpectedPayload {
            expected: ClipboardFormat::Rtf,
            actual: ClipboardFormat::Text,
        }
    ));
}

#[tokio::test]
async fn get_raw_html_strips_envelope() {
    let envelope = cf_core::clipboard::html_fragment::encode("<p>hi</p>");
    let mut platform = MockPlatform::new();
    advertised(&mut platform, ClipboardFormat::Html, true);
    platform
        .expect_get_payload()
        .with(eq(ClipboardFormat::Html))
        .returning(move |_| Ok(ClipboardPayload::Html(envelope.clone())));

    let uc = helper(platform, MockStaging::new());

    assert_eq!(uc.get_raw_html().await.unwrap().as_deref(), Some("<p>hi</p>"));
}

#[tokio::test]
async fn set_raw_html_attaches_envelope_and_text_fallback_then_flushes() {
    let mut seq = mockall::Sequence::new();
    let mut platform = MockPlatform::new();
    platform
        .expect_set_package()
        .withf(|package: &OutgoingClipboardPackage| {
            let envelope = package
                .get(ClipboardFormat::Html)
                .and_then(ClipboardPayload::as_text)
                .unwrap_or_default();
            package.len() == 2
                && envelope.starts_with("Version:0.9\r\n")
                && envelope.contains("SourceURL:https://example.com/doc\r\n")
                && envelope.contains("<!--StartFragment--><b>bold</b><!--EndFragment-->")
                && package.get(ClipboardFormat::Text)
                    == Some(&ClipboardPayload::Text("bold".into()))
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    platform
        .expect_flush()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let uc = helper(platform, MockStaging::new()).with_source_url("https://example.com/doc");

    uc.set_raw_html("<b>bold</b>").await.unwrap();
}

#[tokio::test]
async fn set_text_and_rtf_attach_exactly_one_payload() {
    let mut platform = MockPlatform::new();
    platform
        .expect_set_package()
        .withf(|package: &OutgoingClipboardPackage| {
            package.payloads() == [ClipboardPayload::Text("hello".into())]
        })
        .times(1)
        .returning(|_| Ok(()));
    platform
        .expect_set_package()
        .withf(|package: &OutgoingClipboardPackage| {
            package.payloads() == [ClipboardPayload::Rtf("{\\rtf1 hi}".into())]
        })
        .times(1)
        .returning(|_| Ok(()));
    platform.expect_flush().times(2).returning(|| Ok(()));

    let uc = helper(platform, MockStaging::new());

    uc.set_text("hello").await.unwrap();
    uc.set_rtf("{\\rtf1 hi}").await.unwrap();
}

#[tokio::test]
async fn set_image_stages_submits_then_discards() {
    let staged = PathBuf::from("/tmp/cf-stage-test");
    let mut seq = mockall::Sequence::new();

    let mut staging = MockStaging::new();
    let expected = staged.clone();
    staging
        .expect_stage()
        .withf(|data: &[u8]| data == [0x01, 0x02, 0x03, 0x04])
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(expected.clone()));

    let mut platform = MockPlatform::new();
    let expected = staged.clone();
    platform
        .expect_set_package()
        .withf(move |package: &OutgoingClipboardPackage| {
            package.payloads()
                == [ClipboardPayload::Bitmap(StreamReference::from_file(&expected))]
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    platform
        .expect_flush()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let expected = staged.clone();
    staging
        .expect_discard()
        .withf(move |path: &Path| path == expected)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let uc = helper(platform, staging);

    uc.set_image([0x01u8, 0x02, 0x03, 0x04].as_slice())
        .await
        .unwrap();
}

#[tokio::test]
async fn set_image_ignores_discard_failure() {
    let mut staging = MockStaging::new();
    staging
        .expect_stage()
        .returning(|_| Ok(PathBuf::from("/tmp/cf-stage-gone")));
    staging
        .expect_discard()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("permission denied")));

    let mut platform = MockPlatform::new();
    platform.expect_set_package().returning(|_| Ok(()));
    platform.expect_flush().returning(|| Ok(()));

    let uc = helper(platform, staging);

    assert!(uc.set_image([7u8].as_slice()).await.is_ok());
}

#[tokio::test]
async fn set_image_discards_staging_file_when_submit_fails() {
    let mut staging = MockStaging::new();
    staging
        .expect_stage()
        .returning(|_| Ok(PathBuf::from("/tmp/cf-stage-failed")));
    staging.expect_discard().times(1).returning(|_| Ok(()));

    let mut platform = MockPlatform::new();
    platform
        .expect_set_package()
        .returning(|_| Err(ClipboardError::Unavailable("locked".into())));
    platform.expect_flush().never();

    let uc = helper(platform, staging);

    let err = uc.set_image([7u8].as_slice()).await.unwrap_err();
    assert!(matches!(err, ClipboardError::Unavailable(_)));
}

#[tokio::test]
async fn staging_failure_surfaces_as_platform_error() {
    let mut staging = MockStaging::new();
    staging
        .expect_stage()
        .returning(|_| Err(anyhow::anyhow!("disk full")));
    staging.expect_discard().never();

    let mut platform = MockPlatform::new();
    platform.expect_set_package().never();

    let uc = helper(platform, staging);

    let err = uc.set_image([1u8, 2].as_slice()).await.unwrap_err();
    assert!(matches!(err, ClipboardError::Platform(_)));
}

#[tokio::test]
async fn available_formats_lists_advertised_formats_in_order() {
    let mut platform = MockPlatform::new();
    platform
        .expect_has_format()
        .returning(|format| Ok(matches!(format, ClipboardFormat::Text | ClipboardFormat::Html)));

    let uc = helper(platform, MockStaging::new());

    assert_eq!(
        uc.available_formats().await.unwrap(),
        vec![ClipboardFormat::Text, ClipboardFormat::Html]
    );
}
