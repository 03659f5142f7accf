use std::error::Error;

use log::{error, warn};

/// Iterates over `err` and then every `source()` beneath it.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |e| (*e).source())
}

/// ### Report a failure
/// Logs the top level error, then each cause as `caused by: ...`
/// ### Returns
/// * `usize` - the number of links that were logged
pub fn report_failure(err: &(dyn Error + 'static)) -> usize {
    let mut links = chain(err);
    let mut count = 0;

    if let Some(top) = links.next() {
        error!("{top}");
        count += 1;
    }

    for cause in links {
        warn!("caused by: {cause}");
        count += 1;
    }

    count
}
