// ワーカープール（探索単位の並列実行）

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// 固定数のスレッドでタスクを処理するプール
///
/// ワーカーは1タスクから任意個の結果を送れる。全ワーカーが終わると
/// 結果チャネルが切断されるので、受信側は `Disconnected` で完了を知る。
pub struct WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    task_tx: Option<Sender<T>>,
    result_rx: Receiver<R>,
    handles: Vec<JoinHandle<()>>,
}

impl<T, R> WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// 新しいワーカープールを作成
    pub fn new<F>(num_workers: usize, worker_fn: F) -> Result<Self>
    where
        F: Fn(T, &Sender<R>) + Send + Sync + 'static,
    {
        let (task_tx, task_rx) = unbounded::<T>();
        let (result_tx, result_rx) = unbounded::<R>();
        let worker_fn = Arc::new(worker_fn);

        let mut handles = Vec::with_capacity(num_workers);
        for i in 0..num_workers.max(1) {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let worker_fn = Arc::clone(&worker_fn);

            let handle = thread::Builder::new()
                .name(format!("piecefill-worker-{}", i))
                .spawn(move || {
                    while let Ok(task) = task_rx.recv() {
                        worker_fn(task, &result_tx);
                    }
                })
                .context("ワーカースレッドの起動に失敗しました")?;
            handles.push(handle);
        }

        Ok(Self {
            task_tx: Some(task_tx),
            result_rx,
            handles,
        })
    }

    /// タスクを送信
    pub fn send_task(&self, task: T) -> Result<()> {
        self.task_tx
            .as_ref()
            .ok_or_else(|| anyhow!("タスクキューは既に閉じられています"))?
            .send(task)
            .map_err(|e| anyhow!("タスクの送信に失敗しました: {}", e))
    }

    /// タスクの受付を終了（キューが空になったワーカーから抜ける）
    pub fn close(&mut self) {
        self.task_tx.take();
    }

    /// 結果の受信側
    pub fn results(&self) -> &Receiver<R> {
        &self.result_rx
    }

    /// 結果を受信（ブロッキング）
    pub fn recv_result(&self) -> Result<R> {
        self.result_rx
            .recv()
            .map_err(|e| anyhow!("結果の受信に失敗しました: {}", e))
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.handles.len()
    }

    /// キューを閉じて全ワーカーの終了を待つ
    pub fn join(mut self) -> Result<()> {
        self.close();
        for handle in self.handles.drain(..) {
            handle
                .join()
                .map_err(|_| anyhow!("ワーカースレッドがパニックしました"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn worker_pool_processes_tasks() {
        let pool = WorkerPool::new(2, |x: i32, tx: &Sender<i32>| {
            let _ = tx.send(x * 2);
        })
        .unwrap();

        pool.send_task(5).unwrap();
        pool.send_task(10).unwrap();

        let mut results = vec![pool.recv_result().unwrap(), pool.recv_result().unwrap()];
        results.sort();
        assert_eq!(results, vec![10, 20]);
        pool.join().unwrap();
    }

    #[test]
    fn results_disconnect_after_close() {
        let mut pool = WorkerPool::new(4, |x: i32, tx: &Sender<i32>| {
            std::thread::sleep(Duration::from_millis(5));
            // 1タスクから複数の結果
            let _ = tx.send(x);
            let _ = tx.send(-x);
        })
        .unwrap();
        assert_eq!(pool.num_workers(), 4);

        for i in 1..=10 {
            pool.send_task(i).unwrap();
        }
        pool.close();
        assert!(pool.send_task(11).is_err());

        let results: Vec<i32> = pool.results().iter().collect();
        assert_eq!(results.len(), 20);
        assert_eq!(results.iter().sum::<i32>(), 0);
        pool.join().unwrap();
    }

    #[test]
    fn panicking_worker_is_reported() {
        let pool = WorkerPool::new(1, |_: i32, _: &Sender<()>| panic!("boom")).unwrap();
        pool.send_task(1).unwrap();
        assert!(pool.join().is_err());
    }
}
