use owrates_core::{PageQuery, RatesScraper, Role};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scraper = RatesScraper::new()?;
    let query = PageQuery::default();

    println!("Fetching live hero rates ({} / {})...\n", query.region, query.tier);

    let snapshot = scraper.scrape(&query).await?;

    for role in Role::ALL {
        let bucket = snapshot.roles.bucket(role);
        println!("{:?} ({}):", role, bucket.len());
        for hero in bucket {
            println!("  {:<16} pick {:>6}  win {:>6}", hero.name, hero.pick_rate, hero.win_rate);
        }
        println!();
    }

    println!("Total: {} heroes, generated {}", snapshot.total(), snapshot.last_updated);
    if !snapshot.column_order_verified {
        println!("Warning: column order unverified for this run.");
    }

    Ok(())
}
