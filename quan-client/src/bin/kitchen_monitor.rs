//! Kitchen board in the terminal
//!
//! Polls the kitchen orders and rings the bell for new tickets and for items
//! appended to existing ones. Stops on Ctrl+C.

use std::sync::Arc;

use anyhow::Context;
use quan_client::{ClientConfig, KitchenEvent, KitchenMonitor};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

const EVENT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quan_client=info,kitchen_monitor=info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = config
        .build_http_client()
        .context("Failed to build HTTP client")?;
    info!(
        base_url = %client.base_url(),
        branch_id = ?config.branch_id,
        "Kitchen monitor connecting"
    );

    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
    let cancel = CancellationToken::new();
    let monitor = KitchenMonitor::new(Arc::new(client), &config, tx);
    let handle = tokio::spawn(monitor.run(cancel.clone()));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                cancel.cancel();
                break;
            }
            event = rx.recv() => match event {
                Some(event) => announce(&event),
                None => break,
            },
        }
    }

    handle.await.context("Kitchen monitor task panicked")?;
    Ok(())
}

fn announce(event: &KitchenEvent) {
    match event {
        KitchenEvent::Refreshed { orders } => {
            let pending: usize = orders.iter().map(|o| o.pending_items().count()).sum();
            println!("{} đơn, {} món đang chờ", orders.len(), pending);
        }
        KitchenEvent::NewOrders(orders) => {
            print!("\x07");
            for order in orders {
                let table = order.table_name.as_deref().unwrap_or("?");
                println!("Đơn mới #{} - {} ({} món)", order.id, table, order.items.len());
            }
        }
        KitchenEvent::ItemsAppended(appended) => {
            print!("\x07");
            let table = appended.table_name.as_deref().unwrap_or("?");
            println!("{} gọi thêm:", table);
            for item in &appended.items {
                println!("  {} x{}", item.name, item.quantity);
            }
        }
        KitchenEvent::PollFailed(message) => {
            eprintln!("Lỗi tải đơn bếp: {message}");
        }
    }
}
