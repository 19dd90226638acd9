//! Interactive console front end for `InvoiceStore`.
//!
//! Run with `cargo run --example menu`; set `RUST_LOG=debug` to see store events.

use std::io::{self, BufRead, Write};

use invoice_store::{InvoiceStore, StoreError};
use tracing_subscriber::EnvFilter;

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads until the line parses, or returns `None` at end of input.
fn prompt_parsed<T: std::str::FromStr>(
    input: &mut impl BufRead,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        match prompt(input, label)? {
            None => return Ok(None),
            Some(line) => match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Invalid value, try again."),
            },
        }
    }
}

fn report(err: StoreError) {
    println!("\n{err}.");
}

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut store = InvoiceStore::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n- Invoice control -");
        println!("1- Insert invoice");
        println!("2- Find invoice");
        println!("3- Update invoice status");
        println!("4- Remove invoice");
        println!("5- List all invoices");
        println!("0- Exit");
        let Some(option) = prompt_parsed::<i32>(&mut input, "option: ")? else {
            break;
        };

        match option {
            1 => {
                let Some(number) = prompt_parsed(&mut input, "\nInvoice number: ")? else {
                    break;
                };
                let Some(due_date) = prompt(&mut input, "Due date: ")? else {
                    break;
                };
                let Some(amount) = prompt_parsed(&mut input, "Amount: ")? else {
                    break;
                };
                let Some(status) = prompt(&mut input, "Status ('pendente' or 'paga'): ")? else {
                    break;
                };
                match store.insert(number, due_date, amount, status) {
                    Some(_) => println!("\nInvoice {number} replaced."),
                    None => println!("\nInvoice inserted."),
                }
            }
            2 => {
                let Some(number) = prompt_parsed(&mut input, "\nInvoice number to find: ")?
                else {
                    break;
                };
                match store.find(number) {
                    Ok(invoice) => println!("\nInvoice found!\n{invoice}"),
                    Err(err) => report(err),
                }
            }
            3 => {
                let Some(number) = prompt_parsed(&mut input, "\nInvoice number to update: ")?
                else {
                    break;
                };
                let Some(status) = prompt(&mut input, "New status ('pendente' or 'paga'): ")?
                else {
                    break;
                };
                match store.update_status(number, status) {
                    Ok(()) => println!("\nStatus of invoice {number} updated."),
                    Err(err) => report(err),
                }
            }
            4 => {
                let Some(number) = prompt_parsed(&mut input, "\nInvoice number to remove: ")?
                else {
                    break;
                };
                match store.remove(number) {
                    Ok(_) => println!("\nInvoice {number} removed."),
                    Err(err) => report(err),
                }
            }
            5 => {
                if store.is_empty() {
                    println!("\nNo invoices registered.");
                } else {
                    println!("\n-- Invoices in ascending order --");
                    for invoice in &store {
                        println!("\n----------------------------\n{invoice}");
                    }
                    println!("----------------------------");
                }
            }
            0 => {
                println!("\nExiting...");
                break;
            }
            _ => println!("\nInvalid option! Try again."),
        }
    }
    Ok(())
}
