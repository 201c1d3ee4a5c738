use linkace_archiver::{ArchiveDispatcher, CachedSettingsStore, ChannelSubmitter};
use linkace_core::settings::{ARCHIVE_BACKUPS_ENABLED, ARCHIVE_PRIVATE_BACKUPS_ENABLED};
use linkace_core::{ArchiveJob, LinkId, NewLink, SettingsStore, Tag};
use linkace_links::LinkService;
use linkace_storage::{InMemoryLinkRepository, InMemorySettingsStore, LinkRepository, ReadLinkRepository};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Drains the archive queue into a shared list, the way a job worker would.
fn spawn_worker(mut queue: linkace_archiver::ArchiveQueue) -> Arc<Mutex<Vec<ArchiveJob>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    tokio::spawn(async move {
        while let Some(job) = queue.recv().await {
            sink.lock().unwrap().push(job);
        }
    });
    received
}

fn link(url: &str, is_private: bool) -> NewLink {
    NewLink::builder()
        .user_id(1)
        .url(url)
        .title("Bookmark")
        .is_private(is_private)
        .build()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_archive_backups_follow_settings() {
    let settings = CachedSettingsStore::new(InMemorySettingsStore::with_values([
        (ARCHIVE_BACKUPS_ENABLED, "1"),
        (ARCHIVE_PRIVATE_BACKUPS_ENABLED, "0"),
    ]));
    let (submitter, queue) = ChannelSubmitter::new(16);
    let received = spawn_worker(queue);
    let dispatcher = ArchiveDispatcher::new(settings, submitter);
    let service = LinkService::new(InMemoryLinkRepository::new(), dispatcher.clone());

    let public = service.create(link("https://example.com/public", false)).await.unwrap();
    let private = service.create(link("https://example.com/private", true)).await.unwrap();
    assert!(public.archive_dispatched);
    assert!(!private.archive_dispatched);

    dispatcher
        .settings()
        .set(ARCHIVE_PRIVATE_BACKUPS_ENABLED, "1")
        .await
        .unwrap();
    let second_private = service.create(link("https://example.com/secret", true)).await.unwrap();
    assert!(second_private.archive_dispatched);

    awaitility::at_most(Duration::from_secs(2))
        .poll_interval(Duration::from_millis(10))
        .until_async(|| async { received.lock().unwrap().len() == 2 })
        .await;

    let mut ids: Vec<LinkId> = received.lock().unwrap().iter().map(|job| job.link_id).collect();
    ids.sort();
    assert_eq!(ids, vec![public.link.id, second_private.link.id]);
}

#[tokio::test]
async fn test_duplicate_detection_end_to_end() {
    let (submitter, _queue) = ChannelSubmitter::new(16);
    let service = LinkService::new(
        InMemoryLinkRepository::new(),
        ArchiveDispatcher::new(InMemorySettingsStore::new(), submitter),
    );

    let first = service.create(link("http://ex.com/a/", false)).await.unwrap();
    let other = service.create(link("http://other.com/a", false)).await.unwrap();
    let broader = service.create(link("https://ex.com/a/b", false)).await.unwrap();

    let ids = service.duplicates_for_url("https://ex.com/a?x=1").await.unwrap();
    assert_eq!(ids, vec![first.link.id, broader.link.id]);
    assert!(!ids.contains(&other.link.id));

    // the broader link contains the first link's key, not the other way round
    assert_eq!(service.duplicates_of(broader.link.id).await.unwrap(), Vec::<LinkId>::new());
    assert_eq!(service.duplicates_of(first.link.id).await.unwrap(), vec![broader.link.id]);

    assert!(service.duplicates_for_url("not a url").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_trash_keeps_relations_until_purged() {
    let (submitter, _queue) = ChannelSubmitter::new(16);
    let service = LinkService::new(
        InMemoryLinkRepository::new(),
        ArchiveDispatcher::new(InMemorySettingsStore::new(), submitter),
    );

    let created = service.create(link("https://crates.io/crates/url", false)).await.unwrap();
    let id = created.link.id;
    let tag = Tag { id: 1, name: "rust".to_string() };
    service.repository().attach_tags(id, &[tag.clone()]).await.unwrap();
    service.repository().add_note(id, "parser of choice").await.unwrap();

    assert!(service.trash(id).await.unwrap());
    assert_eq!(service.repository().find_related_tags(id).await.unwrap(), vec![tag]);

    assert!(service.restore(id).await.unwrap());
    assert_eq!(service.get(id).await.unwrap().icon().name, "brand.rust");

    assert!(service.purge(id).await.unwrap());
    assert!(service.repository().find_notes(id).await.unwrap().is_empty());
    assert!(service.repository().find_with_trashed(id).await.unwrap().is_none());
}
