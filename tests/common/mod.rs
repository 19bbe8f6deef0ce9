use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_charges_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["key", "amount", "name"])?;

    for i in 1..=rows {
        wtr.write_record([
            "19995056708",
            &format!("{}.50", i),
            &format!("CLIENTE {}", i),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_random_charges_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["key", "amount", "name"])?;

    for _ in 0..rows {
        let cents: u64 = rng.gen_range(0..10_000_000);
        let amount = format!("{}.{:02}", cents / 100, cents % 100);
        let name_len = rng.gen_range(1..=40);
        let name: String = (0..name_len)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        wtr.write_record(["19995056708", &amount, &name])?;
    }

    wtr.flush()?;
    Ok(())
}
