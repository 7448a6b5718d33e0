use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use course_admin::table::TablePage;
use course_admin::{AppError, CourseAdmin, CourseForm, Field, FormError};

#[derive(Debug, Parser)]
#[command(name = "course-admin", about = "Manage the course records held by the course API")]
pub struct Cli {
    /// Base URL of the course API (overrides COURSES_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Rows per page for `list` (overrides COURSES_PAGE_SIZE)
    #[arg(long, global = true, value_parser = page_size_arg)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one page of courses, most recent start first.
    List {
        #[arg(long)]
        filter: Option<String>,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Create a course.
    Add(AddArgs),
    /// Change the editable fields of an existing course.
    Edit(EditArgs),
    /// Delete a course.
    Delete { id: String },
    /// Autocomplete values seen across existing courses.
    Suggest { field: SuggestField, query: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub university: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub country: String,
    /// YYYY/MM/DD; any separators are accepted
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    #[arg(long)]
    pub currency: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuggestField {
    University,
    City,
    Country,
}

impl From<SuggestField> for Field {
    fn from(field: SuggestField) -> Self {
        match field {
            SuggestField::University => Field::University,
            SuggestField::City => Field::City,
            SuggestField::Country => Field::Country,
        }
    }
}

fn page_size_arg(raw: &str) -> Result<usize, String> {
    course_admin::config::parse_page_size(raw).map_err(|e| e.to_string())
}

pub async fn run(command: Command, admin: &mut CourseAdmin) -> Result<(), AppError> {
    match command {
        Command::List { filter, page } => {
            let table = admin.table_mut();
            table.set_filter(filter.as_deref().unwrap_or_default());
            table.set_page(page.saturating_sub(1));
            print_page(&admin.table().page());
        }
        Command::Add(args) => {
            let mut form = admin.open_create();
            form.set_field(Field::CourseName, args.name)?;
            form.set_field(Field::University, args.university)?;
            form.set_field(Field::City, args.city)?;
            form.set_field(Field::Country, args.country)?;
            form.input_date(Field::StartDate, &args.start)?;
            form.input_date(Field::EndDate, &args.end)?;
            form.set_field(Field::Description, args.description)?;
            form.set_field(Field::Price, args.price)?;
            form.set_field(Field::Currency, args.currency.to_uppercase())?;
            submit(admin, &form).await?;
        }
        Command::Edit(args) => {
            let mut form = admin.open_edit(&args.id)?;
            if let Some(start) = args.start {
                form.input_date(Field::StartDate, &start)?;
            }
            if let Some(end) = args.end {
                form.input_date(Field::EndDate, &end)?;
            }
            if let Some(description) = args.description {
                form.set_field(Field::Description, description)?;
            }
            if let Some(price) = args.price {
                form.set_field(Field::Price, price)?;
            }
            if let Some(currency) = args.currency {
                form.set_field(Field::Currency, currency.to_uppercase())?;
            }
            submit(admin, &form).await?;
        }
        Command::Delete { id } => {
            admin.delete(&id).await?;
            println!("Deleted {}", id);
        }
        Command::Suggest { field, query } => {
            let field = Field::from(field);
            let mut form = admin.open_create();
            form.set_field(field, query)?;
            for value in form.suggestions(field) {
                println!("{}", value);
            }
        }
    }
    Ok(())
}

async fn submit(admin: &mut CourseAdmin, form: &CourseForm) -> Result<(), AppError> {
    let errors = form.errors();
    if !errors.is_empty() {
        for (field, err) in &errors {
            eprintln!("{} {}", field.label(), err);
        }
        return Err(FormError::NotSubmittable(errors).into());
    }

    let course = admin.save(form).await?;
    info!("Saved course {}", course.id);
    println!("Saved {} ({})", course.course_name, course.id);
    Ok(())
}

fn print_page(page: &TablePage<'_>) {
    println!(
        "{:<26} {:<30} {:<28} {:>11} {:>6} {:>12}",
        "ID", "Course", "Location", "Start", "Days", "Price"
    );
    for row in &page.rows {
        println!(
            "{:<26} {:<30} {:<28} {:>11} {:>6} {:>8.2} {}",
            row.id, row.course_name, row.location, row.start, row.length_days, row.price, row.currency
        );
    }
    println!(
        "Page {} of {} ({} courses)",
        page.index + 1,
        page.page_count,
        page.total
    );
}
