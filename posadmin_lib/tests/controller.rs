//! Behavioral tests for the list controller, run on a paused clock so the
//! debounce window is exact and fetch interleavings are deterministic.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use posadmin_api::types::Page;
use posadmin_lib::{source_fn, ListController, ListNotice, ListSnapshot};
use tokio::sync::{oneshot, watch};

type Calls = Arc<Mutex<Vec<(i64, String)>>>;

fn page_for(page: i64, last_page: i64, total: i64, items: Vec<String>) -> Page<String> {
    let per_page = 10;
    let from = if items.is_empty() {
        None
    } else {
        Some((page - 1) * per_page + 1)
    };
    let to = from.map(|f| f + items.len() as i64 - 1);
    Page {
        data: items,
        current_page: page,
        last_page,
        per_page,
        total,
        from,
        to,
    }
}

/// A source that records every call and echoes back the requested page.
fn echo_source(calls: Calls, last_page: i64) -> impl posadmin_lib::PageSource<Item = String> {
    source_fn(move |page, search| {
        let calls = Arc::clone(&calls);
        async move {
            calls.lock().unwrap().push((page, search.clone()));
            Ok(page_for(
                page,
                last_page,
                last_page * 10,
                vec![format!("{search}@{page}")],
            ))
        }
    })
}

async fn wait_for<T, F>(
    rx: &mut watch::Receiver<ListSnapshot<T>>,
    pred: F,
) -> ListSnapshot<T>
where
    T: Clone + Send + Sync,
    F: Fn(&ListSnapshot<T>) -> bool,
{
    rx.wait_for(|s| pred(s)).await.unwrap().clone()
}

#[tokio::test(start_paused = true)]
async fn debounce_commits_only_the_trailing_value() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, mut snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 3));

    // "apple" typed over 300ms, then "apple pie" - all gaps under the window.
    for text in ["a", "ap", "app", "appl", "apple"] {
        handle.set_search_text(text);
        tokio::time::sleep(Duration::from_millis(60)).await;
    }
    handle.set_search_text("apple pie");

    let snap = wait_for(&mut snaps, |s| !s.loading && s.notice.is_some()).await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.as_slice(), &[(1, "apple pie".to_string())]);
    assert_eq!(snap.search, "apple pie");
    assert_eq!(snap.page, 1);
}

#[tokio::test(start_paused = true)]
async fn no_fetch_before_the_window_elapses() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, _snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 3));

    handle.set_search_text("sugar");
    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(calls.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn search_resets_page_to_one() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, mut snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 9));

    handle.set_page(3);
    let snap = wait_for(&mut snaps, |s| !s.loading && s.page == 3).await;
    assert_eq!(snap.result.current_page, 3);

    handle.set_search_text("soap");
    let snap = wait_for(&mut snaps, |s| s.notice.is_some()).await;

    assert_eq!(snap.page, 1);
    assert_eq!(snap.search, "soap");
    assert_eq!(
        calls.lock().unwrap().last().unwrap(),
        &(1, "soap".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn pagination_does_not_touch_search_and_stays_silent() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, mut snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 9));

    handle.set_search_text("tea");
    wait_for(&mut snaps, |s| s.notice.is_some()).await;

    handle.set_page(2);
    let snap = wait_for(&mut snaps, |s| !s.loading && s.page == 2).await;

    assert_eq!(snap.search, "tea");
    // Pagination-triggered fetches never carry a result-count notice.
    assert_eq!(snap.notice, None);
    assert_eq!(
        calls.lock().unwrap().last().unwrap(),
        &(2, "tea".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn stale_response_never_overwrites_a_newer_one() {
    // Page 4 responds only when released; page 5 responds immediately.
    let (gate_tx, gate_rx) = oneshot::channel::<()>();
    let gate = Arc::new(Mutex::new(Some(gate_rx)));

    let source = source_fn(move |page, _search| {
        let gate = Arc::clone(&gate);
        async move {
            if page == 4 {
                let rx = gate.lock().unwrap().take().expect("page 4 fetched once");
                let _ = rx.await;
            }
            Ok(page_for(page, 9, 90, vec![format!("item@{page}")]))
        }
    });
    let (handle, mut snaps) = ListController::spawn(source);

    // Two pagination clicks before either request resolves.
    handle.set_page(4);
    handle.set_page(5);

    let snap = wait_for(&mut snaps, |s| !s.loading && s.page == 5).await;
    assert_eq!(snap.result.data, vec!["item@5".to_string()]);

    // Now let the stale page-4 response arrive; it must be discarded.
    gate_tx.send(()).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let snap = snaps.borrow().clone();
    assert_eq!(snap.page, 5);
    assert_eq!(snap.result.data, vec!["item@5".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn refetch_repeats_the_current_query_unchanged() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, mut snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 9));

    handle.set_search_text("rice");
    wait_for(&mut snaps, |s| s.notice.is_some()).await;
    handle.set_page(2);
    wait_for(&mut snaps, |s| !s.loading && s.page == 2).await;

    handle.refetch();
    let snap = wait_for(&mut snaps, |s| !s.loading && calls_len(&calls) == 3).await;

    assert_eq!(
        calls.lock().unwrap().last().unwrap(),
        &(2, "rice".to_string())
    );
    // Refetch is silent and leaves the query state alone.
    assert_eq!(snap.page, 2);
    assert_eq!(snap.search, "rice");
    assert_eq!(snap.notice, None);
}

#[tokio::test(start_paused = true)]
async fn page_is_reconciled_with_the_server_after_a_delete() {
    // Server-side clamp: after the last row of page 3 is deleted, the
    // backend reports current_page 2.
    let last_page = Arc::new(Mutex::new(3i64));
    let server_pages = Arc::clone(&last_page);

    let source = source_fn(move |page, _search| {
        let server_pages = Arc::clone(&server_pages);
        async move {
            let last = *server_pages.lock().unwrap();
            let effective = page.min(last);
            Ok(page_for(
                effective,
                last,
                last * 10,
                vec![format!("item@{effective}")],
            ))
        }
    });
    let (handle, mut snaps) = ListController::spawn(source);

    handle.set_page(3);
    wait_for(&mut snaps, |s| !s.loading && s.page == 3).await;

    // The delete happened elsewhere; the list just refetches.
    *last_page.lock().unwrap() = 2;
    handle.refetch();

    let snap = wait_for(&mut snaps, |s| !s.loading && s.page == 2).await;
    assert_eq!(snap.result.current_page, 2);
    assert_eq!(snap.result.last_page, 2);
}

#[tokio::test(start_paused = true)]
async fn empty_search_result_raises_the_no_results_notice() {
    let source = source_fn(move |page, _search| async move {
        Ok(page_for(page, 1, 0, Vec::new()))
    });
    let (handle, mut snaps) = ListController::spawn(source);

    handle.set_search_text("does-not-exist");
    let snap = wait_for(&mut snaps, |s| s.notice.is_some()).await;

    assert_eq!(snap.notice, Some(ListNotice::NoResults));
    assert!(snap.result.is_empty());
    assert_eq!(snap.result.total, 0);
}

#[tokio::test(start_paused = true)]
async fn search_result_notice_carries_the_total_count() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let (handle, mut snaps) = ListController::spawn(echo_source(Arc::clone(&calls), 4));

    handle.set_search_text("milk");
    let snap = wait_for(&mut snaps, |s| s.notice.is_some()).await;
    assert_eq!(snap.notice, Some(ListNotice::ResultsFound(40)));
}

#[tokio::test(start_paused = true)]
async fn a_failed_fetch_keeps_the_previous_result_visible() {
    let failing = Arc::new(Mutex::new(false));
    let fail_flag = Arc::clone(&failing);

    let source = source_fn(move |page, _search| {
        let fail_flag = Arc::clone(&fail_flag);
        async move {
            if *fail_flag.lock().unwrap() {
                Err(posadmin_api::Error::Server { status: 500 })
            } else {
                Ok(page_for(page, 9, 90, vec![format!("item@{page}")]))
            }
        }
    });
    let (handle, mut snaps) = ListController::spawn(source);

    handle.refetch();
    let snap = wait_for(&mut snaps, |s| !s.loading && !s.result.is_empty()).await;
    assert_eq!(snap.result.data, vec!["item@1".to_string()]);

    *failing.lock().unwrap() = true;
    handle.set_page(2);
    let snap = wait_for(&mut snaps, |s| s.error.is_some()).await;

    assert!(!snap.loading);
    // The old page is still there; no flash-to-empty.
    assert_eq!(snap.result.data, vec!["item@1".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn loading_flag_follows_the_fetch() {
    let (gate_tx, gate_rx) = oneshot::channel::<()>();
    let gate = Arc::new(Mutex::new(Some(gate_rx)));

    let source = source_fn(move |page, _search| {
        let gate = Arc::clone(&gate);
        async move {
            let rx = gate.lock().unwrap().take();
            if let Some(rx) = rx {
                let _ = rx.await;
            }
            Ok(page_for(page, 1, 1, vec!["row".to_string()]))
        }
    });
    let (handle, mut snaps) = ListController::spawn(source);

    handle.refetch();
    let snap = wait_for(&mut snaps, |s| s.loading).await;
    assert!(snap.loading);

    gate_tx.send(()).unwrap();
    let snap = wait_for(&mut snaps, |s| !s.loading && !s.result.is_empty()).await;
    assert!(!snap.loading);
}

fn calls_len(calls: &Calls) -> usize {
    calls.lock().unwrap().len()
}
