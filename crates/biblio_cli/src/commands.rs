//! Command implementations and table printing.

use biblio_core::{
    BorrowOutcome, CatalogResult, Item, ItemId, Library, Member, MemberId,
};

/// Adds an item and prints its new identifier.
pub fn add_item(library: &mut Library, title: &str, author: &str) -> CatalogResult<()> {
    let id = library.add_item(title, author)?;
    println!("Added item {id}: {title} by {author}");
    Ok(())
}

/// Registers a member and prints the new identifier.
pub fn add_member(library: &mut Library, name: &str) -> CatalogResult<()> {
    let id = library.add_member(name)?;
    println!("Added member {id}: {name}");
    Ok(())
}

/// Runs a borrow request and prints the outcome.
pub fn borrow(
    library: &mut Library,
    title: &str,
    member: MemberId,
    days: u32,
) -> CatalogResult<()> {
    match library.borrow_for(title, member, days)? {
        BorrowOutcome::Borrowed { item_id, due } => {
            println!("Member {member} borrowed item {item_id}, due {due}");
        }
        BorrowOutcome::Waitlisted { item_id, position } => {
            println!(
                "No copy available; member {member} queued on item {item_id} at position {position}"
            );
            println!("Use `biblio cancel-hold {item_id} {member}` to leave the queue.");
        }
        BorrowOutcome::AlreadyBorrowed { item_id } => {
            println!("Member {member} already holds item {item_id}");
        }
    }
    Ok(())
}

/// Returns an item and prints any promotion.
pub fn return_item(library: &mut Library, item: ItemId, member: MemberId) -> CatalogResult<()> {
    let outcome = library.return_item(item, member)?;
    println!("Item {item} returned by member {member}");
    if let Some(promoted) = outcome.promoted {
        println!("Member {promoted} promoted from the waiting list");
    }
    Ok(())
}

/// Cancels a waiting-list hold.
pub fn cancel_hold(library: &mut Library, item: ItemId, member: MemberId) -> CatalogResult<()> {
    if library.cancel_hold(item, member)? {
        println!("Member {member} removed from the waiting list of item {item}");
    } else {
        println!("Member {member} was not queued on item {item}");
    }
    Ok(())
}

/// Deletes a member record.
pub fn delete_member(library: &mut Library, member: MemberId) -> CatalogResult<()> {
    let removed = library.delete_member(member)?;
    println!("Deleted member {member}: {}", removed.name());
    Ok(())
}

/// Prints an item table.
pub fn print_items(items: &[&Item]) {
    if items.is_empty() {
        println!("No items.");
        return;
    }
    println!(
        "{:<6} {:<30} {:<20} {:<10} {:<10} {}",
        "ID", "Title", "Author", "Status", "Due", "Borrows"
    );
    for item in items {
        let status = if item.is_available() {
            "available".to_string()
        } else {
            item.borrower()
                .map(|m| format!("member {m}"))
                .unwrap_or_default()
        };
        let due = item
            .due_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<30} {:<20} {:<10} {:<10} {}",
            item.id().to_string(),
            item.title(),
            item.author(),
            status,
            due,
            item.borrow_count()
        );
    }
}

/// Prints a member table with each member's current loans.
pub fn print_members(library: &Library, members: &[&Member]) {
    if members.is_empty() {
        println!("No members.");
        return;
    }
    println!("{:<6} {:<20} {}", "ID", "Name", "Borrowed");
    for member in members {
        let borrowed = if member.borrowed().is_empty() {
            "-".to_string()
        } else {
            member
                .borrowed()
                .iter()
                .map(|id| describe_loan(library, *id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "{:<6} {:<20} {}",
            member.id().to_string(),
            member.name(),
            borrowed
        );
    }
}

/// Prints the popularity ranking.
pub fn most_borrowed(library: &Library, top: usize) {
    let ranked = library.most_borrowed(top);
    if ranked.is_empty() {
        println!("No items.");
        return;
    }
    for (rank, item) in ranked.iter().enumerate() {
        println!(
            "{}. {} by {} (borrowed {} times)",
            rank + 1,
            item.title(),
            item.author(),
            item.borrow_count()
        );
    }
}

fn describe_loan(library: &Library, id: ItemId) -> String {
    match library.catalog().items().get(id) {
        Some(item) => match item.due_date() {
            Some(due) => format!("{id}: {} (due {due})", item.title()),
            None => format!("{id}: {}", item.title()),
        },
        None => id.to_string(),
    }
}
