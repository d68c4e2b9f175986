use order_desk::{Desk, render, setup_environment};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logger
    let config = setup_environment()?;
    tracing::info!(catalog = %config.client_config().dishes_url(), "Order desk starting");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut desk = Desk::new();

    // 2. Client identity
    loop {
        let Some(table) = prompt(&mut lines, "Mesa: ").await? else {
            return Ok(());
        };
        let Some(time) = prompt(&mut lines, "Hora: ").await? else {
            return Ok(());
        };
        if desk.save_client(&table, &time) {
            break;
        }
        println!("{}", desk.notice().unwrap_or(render::MISSING_FIELDS_NOTICE));
    }

    // 3. Catalog (failures are logged, the desk keeps running without dishes)
    desk.connect_catalog(&config.client_config()).await;

    // 4. Command loop
    println!("{}", desk.screen());
    while let Some(line) = prompt(&mut lines, "> ").await? {
        let outcome = desk.handle_line(&line);
        if outcome.quit {
            break;
        }
        println!("{}", outcome.screen);
    }

    tracing::info!("Order desk stopped");
    Ok(())
}
