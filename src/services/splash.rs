use std::time::Duration;

use tokio::task::{self, JoinHandle};
use tracing::debug;

// Заставка: одноразовый отложенный переход к главному экрану. Планируется
// на рантайме слоя представления и не несет состояния сеанса.
pub fn schedule<F>(delay: Duration, on_finished: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    task::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!("splash delay of {:?} elapsed", delay);
        on_finished();
    })
}
