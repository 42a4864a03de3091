use anyhow::Result;
use posadmin_lib::types::{
    AdminUser, Category, Employee, Page, Product, Receivable, StockActivity, Transaction,
    UserActivity,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Barcode")]
    barcode: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Buy")]
    purchase_price: String,
    #[tabled(rename = "Sell")]
    selling_price: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "Unit")]
    unit: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Products")]
    products: String,
}

#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Position")]
    position: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Invoice")]
    invoice: String,
    #[tabled(rename = "Cashier")]
    cashier: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct ReceivableRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Invoice")]
    invoice: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Amount Due")]
    amount_due: String,
    #[tabled(rename = "Due Date")]
    due_date: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct StockActivityRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Dir")]
    direction: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "By")]
    actor: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct UserActivityRow {
    #[tabled(rename = "#")]
    row: i64,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Date")]
    date: String,
}

// -- Printing --

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Renders the rows, or the explicit empty-state line - never a bare table.
fn print_table<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        println!("no results");
    } else {
        println!("{}", Table::new(rows));
    }
}

pub fn paging_footer<T>(page: &Page<T>) {
    eprintln!(
        "Page {}/{} ({} total)",
        page.current_page, page.last_page, page.total
    );
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn date(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn print_products(page: &Page<Product>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_products_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_products_table(page: &Page<Product>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, p)| ProductRow {
            row: page.row_number(i),
            name: p.name.clone(),
            barcode: p.barcode.clone().unwrap_or_default(),
            category: p.category_name.clone().unwrap_or_default(),
            purchase_price: money(p.purchase_price),
            selling_price: money(p.selling_price),
            stock: p.stock,
            unit: p.unit.clone(),
        })
        .collect();
    print_table(rows);
}

pub fn print_categories(page: &Page<Category>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_categories_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_categories_table(page: &Page<Category>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryRow {
            row: page.row_number(i),
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            products: c.products_count.map(|n| n.to_string()).unwrap_or_default(),
        })
        .collect();
    print_table(rows);
}

pub fn print_admins(page: &Page<AdminUser>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_admins_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_admins_table(page: &Page<AdminUser>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, a)| AdminRow {
            row: page.row_number(i),
            name: a.name.clone(),
            email: a.email.clone(),
            role: a.role.clone(),
        })
        .collect();
    print_table(rows);
}

pub fn print_employees(page: &Page<Employee>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_employees_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_employees_table(page: &Page<Employee>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, e)| EmployeeRow {
            row: page.row_number(i),
            name: e.name.clone(),
            phone: e.phone.clone().unwrap_or_default(),
            position: e.position.clone().unwrap_or_default(),
        })
        .collect();
    print_table(rows);
}

pub fn print_transactions(page: &Page<Transaction>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_transactions_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_transactions_table(page: &Page<Transaction>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, t)| TransactionRow {
            row: page.row_number(i),
            invoice: t.invoice_number.clone(),
            cashier: t.cashier_name.clone(),
            customer: t.customer_name.clone().unwrap_or_default(),
            total: money(t.total),
            paid: money(t.paid),
            change: money(t.change),
            date: date(&t.created_at),
        })
        .collect();
    print_table(rows);
}

pub fn print_receivables(page: &Page<Receivable>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_receivables_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_receivables_table(page: &Page<Receivable>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, r)| ReceivableRow {
            row: page.row_number(i),
            invoice: r.invoice_number.clone(),
            customer: r.customer_name.clone(),
            amount_due: money(r.amount_due),
            due_date: r.due_date.as_ref().map(date).unwrap_or_default(),
            status: r.status.to_string(),
        })
        .collect();
    print_table(rows);
}

pub fn print_stock_activity(page: &Page<StockActivity>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_stock_activity_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_stock_activity_table(page: &Page<StockActivity>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, s)| StockActivityRow {
            row: page.row_number(i),
            product: s.product_name.clone(),
            direction: s.direction.to_string(),
            quantity: s.quantity,
            note: s.note.clone().unwrap_or_default(),
            actor: s.actor_name.clone(),
            date: date(&s.created_at),
        })
        .collect();
    print_table(rows);
}

pub fn print_user_activity(page: &Page<UserActivity>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Table => {
            print_user_activity_table(page);
            paging_footer(page);
        }
    }
}

pub fn print_user_activity_table(page: &Page<UserActivity>) {
    let rows = page
        .data
        .iter()
        .enumerate()
        .map(|(i, a)| UserActivityRow {
            row: page.row_number(i),
            user: a.user_name.clone(),
            action: a.action.clone(),
            date: date(&a.created_at),
        })
        .collect();
    print_table(rows);
}

/// Writes transactions as CSV to any writer (stdout or a file).
pub fn write_transactions_csv<W: std::io::Write>(
    writer: W,
    transactions: &[Transaction],
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "invoice_number",
        "cashier",
        "customer",
        "total",
        "paid",
        "change",
        "created_at",
    ])?;
    for t in transactions {
        wtr.write_record([
            t.invoice_number.as_str(),
            t.cashier_name.as_str(),
            t.customer_name.as_deref().unwrap_or(""),
            &money(t.total),
            &money(t.paid),
            &money(t.change),
            &t.created_at.to_rfc3339(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
