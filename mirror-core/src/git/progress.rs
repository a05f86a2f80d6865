//! Remote transfer progress reporting

use std::io::Write;

use git2::RemoteCallbacks;

/// Build remote callbacks for a clone or fetch
///
/// With `enabled`, messages sent by the remote and the local object transfer
/// counters are streamed to stdout. Otherwise the transfer runs silently.
pub fn remote_callbacks<'a>(enabled: bool) -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    if !enabled {
        return callbacks;
    }

    callbacks.sideband_progress(|data| {
        let mut out = std::io::stdout().lock();
        // stdout errors never abort a transfer
        let _ = out.write_all(data);
        let _ = out.flush();
        true
    });

    let mut last_percent = None;
    callbacks.transfer_progress(move |stats| {
        let received = stats.received_objects();
        let total = stats.total_objects();
        let percent = percent(received, total);

        if last_percent != Some(percent) {
            last_percent = Some(percent);
            let mut out = std::io::stdout().lock();
            let _ = write!(
                out,
                "\rReceiving objects: {:3}% ({}/{}), {} bytes",
                percent,
                received,
                total,
                stats.received_bytes()
            );
            if received == total {
                let _ = writeln!(out);
            }
            let _ = out.flush();
        }
        true
    });

    callbacks
}

/// Completion percentage of `done` out of `total`, in 0..=100
fn percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100) / total
}
