use crate::{
    api::Outcome,
    errors::IoError,
    layout::{Layout, LayoutEntry},
    materialize::{create_folder_and_files, materialize},
    notify::Notifier,
    prompt::{PromptError, Prompter},
};
use miette::Diagnostic;
use std::{fmt, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("I/O error within catalog domain")]
    #[diagnostic(code(skela::catalog::io))]
    Io(#[from] IoError),

    #[error("Error occurred trying to prompt user")]
    #[diagnostic(code(skela::catalog::prompt))]
    Prompt(#[from] PromptError),

    #[error("Unknown template: {name}")]
    #[diagnostic(
        code(skela::catalog::unknown_template),
        help("Valid template names are the ones offered in the selection list")
    )]
    UnknownTemplate { name: String },
}

/// The fixed project archetypes offered by template mode.
///
/// Each variant resolves to a pure data [`Layout`]; the catalog carries no
/// behavior beyond that lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    FullStack,
    MachineLearning,
    Basic,
    DataScience,
    WebApi,
    PythonPackage,
    MobileApp,
    WebScraping,
}

impl Template {
    /// Catalog order; the selection list offered to the user is exactly
    /// this order.
    pub const ALL: [Template; 8] = [
        Template::FullStack,
        Template::MachineLearning,
        Template::Basic,
        Template::DataScience,
        Template::WebApi,
        Template::PythonPackage,
        Template::MobileApp,
        Template::WebScraping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::FullStack => "Full Stack",
            Template::MachineLearning => "Machine Learning",
            Template::Basic => "Basic",
            Template::DataScience => "Data Science",
            Template::WebApi => "Web API",
            Template::PythonPackage => "Python Package",
            Template::MobileApp => "Mobile App",
            Template::WebScraping => "Web Scraping",
        }
    }

    /// Display names in catalog order, as offered for selection.
    pub fn names() -> Vec<&'static str> {
        Template::ALL
            .iter()
            .map(|template| template.name())
            .collect()
    }

    /// Reverse lookup by display name.
    ///
    /// Selection lists are built from [`Template::ALL`], so a miss only
    /// happens with a misbehaving input provider; the dialogue turns it
    /// into [`CatalogError::UnknownTemplate`] instead of assuming.
    pub fn from_name(name: &str) -> Option<Template> {
        Template::ALL
            .into_iter()
            .find(|template| template.name() == name)
    }

    /// The folder/file tree this template materializes: same paths, same
    /// file names, same order on every call. An empty folder component
    /// addresses the project root; empty file names keep a folder without
    /// putting anything inside it.
    ///
    /// ```
    /// use skela::catalog::Template;
    ///
    /// let layout = Template::Basic.layout();
    /// assert_eq!(layout.entries.len(), 4);
    /// assert_eq!(layout.entries[0].folder, "src");
    /// ```
    pub fn layout(self) -> Layout {
        let entries = match self {
            Template::FullStack => vec![
                LayoutEntry::new("client/public", &["index.html", "favicon.ico"]),
                LayoutEntry::new("client/src/components", &["App.js", "Header.js"]),
                LayoutEntry::new("client/src", &["App.js", "index.js"]),
                LayoutEntry::new(
                    "server/controllers",
                    &["userController.js", "authController.js"],
                ),
                LayoutEntry::new("server/models", &["userModel.js", "postModel.js"]),
                LayoutEntry::new("server/routes", &["userRoutes.js", "postRoutes.js"]),
                LayoutEntry::new("server", &["server.js", "package.json"]),
                LayoutEntry::new("client", &["package.json", "webpack.config.js"]),
            ],
            Template::MachineLearning => vec![
                LayoutEntry::new("data/raw", &["dataset.csv"]),
                LayoutEntry::new("data/processed", &["cleaned_data.csv"]),
                LayoutEntry::new("notebooks", &["EDA.ipynb", "model_training.ipynb"]),
                LayoutEntry::new("models", &["model.pkl", "model_performance.txt"]),
                LayoutEntry::new("src", &["preprocess.py", "train.py", "predict.py"]),
                LayoutEntry::new("", &["requirements.txt", "README.md", "main.py"]),
            ],
            Template::Basic => vec![
                LayoutEntry::new("src", &["index.html", "styles.css", "app.js"]),
                LayoutEntry::new("assets/images", &[""]),
                LayoutEntry::new("assets/icons", &[""]),
                LayoutEntry::new("", &["README.md"]),
            ],
            Template::DataScience => vec![
                LayoutEntry::new(
                    "data",
                    &["raw_data.csv", "processed_data.csv", "features.csv"],
                ),
                LayoutEntry::new(
                    "notebooks",
                    &[
                        "data_cleaning.ipynb",
                        "feature_engineering.ipynb",
                        "model_evaluation.ipynb",
                    ],
                ),
                LayoutEntry::new(
                    "scripts",
                    &[
                        "data_preprocessing.py",
                        "feature_selection.py",
                        "model_train.py",
                    ],
                ),
                LayoutEntry::new("results", &["accuracy_scores.txt", "confusion_matrix.png"]),
                LayoutEntry::new("models", &["final_model.pkl", "test_predictions.csv"]),
                LayoutEntry::new("", &["README.md"]),
            ],
            Template::WebApi => vec![
                LayoutEntry::new(
                    "controllers",
                    &[
                        "userController.js",
                        "authController.js",
                        "productController.js",
                    ],
                ),
                LayoutEntry::new(
                    "models",
                    &["userModel.js", "productModel.js", "orderModel.js"],
                ),
                LayoutEntry::new(
                    "routes",
                    &["userRoutes.js", "authRoutes.js", "productRoutes.js"],
                ),
                LayoutEntry::new("middleware", &["authMiddleware.js"]),
                LayoutEntry::new("config", &["db.js"]),
                LayoutEntry::new("", &["server.js", "package.json", "README.md"]),
            ],
            Template::PythonPackage => vec![
                LayoutEntry::new("src/my_package", &["__init__.py", "module1.py", "module2.py"]),
                LayoutEntry::new("tests", &["test_module1.py", "test_module2.py"]),
                LayoutEntry::new("", &["setup.py", "requirements.txt", "README.md"]),
            ],
            Template::MobileApp => vec![
                LayoutEntry::new("src/components", &["Button.js"]),
                LayoutEntry::new("src/screens", &["HomeScreen.js"]),
                LayoutEntry::new("src", &["App.js", "index.js"]),
                LayoutEntry::new("assets/images", &[""]),
                LayoutEntry::new("assets/fonts", &[""]),
                LayoutEntry::new("", &["package.json", "README.md"]),
            ],
            Template::WebScraping => vec![
                LayoutEntry::new("data/raw_html", &[""]),
                LayoutEntry::new("data", &["scraped_data.csv"]),
                LayoutEntry::new("scripts", &["scraper.py", "parser.py", "data_cleaner.py"]),
                LayoutEntry::new("results", &["output_data.csv", "data_analysis.ipynb"]),
                LayoutEntry::new("", &["requirements.txt", "README.md"]),
            ],
        };

        Layout::new(entries)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runs the template-mode dialogue: template pick, target directory name,
/// then a single materialization pass under the workspace root.
///
/// # Errors
///
/// Returns a [`CatalogError`] if:
///
/// - The input provider fails (dismissing a prompt is not a failure).
/// - The answered template name is not in the catalog.
/// - The target directory or one of the layout entries cannot be created.
pub fn run_template(
    prompter: &mut dyn Prompter,
    notifier: &dyn Notifier,
    workspace: Option<&Path>,
) -> Result<Outcome, CatalogError> {
    let names = Template::names();

    let Some(choice) = prompter.pick("Choose a template for your project", &names)? else {
        return Ok(Outcome::Cancelled);
    };

    let template =
        Template::from_name(&choice).ok_or(CatalogError::UnknownTemplate { name: choice })?;

    let Some(dir_name) = prompter.text("Enter the directory name for your project", None)? else {
        return Ok(Outcome::Cancelled);
    };

    if dir_name.is_empty() {
        return Ok(Outcome::Cancelled);
    }

    let Some(root) = workspace else {
        log::debug!("no workspace root available; leaving without side effects");
        return Ok(Outcome::NoWorkspace);
    };

    log::debug!("materializing {} under {}", template, root.display());

    let target = create_folder_and_files(root, Path::new(&dir_name), &[])?;

    materialize(&target, &template.layout())?;

    notifier.info(&format!(
        "Project created with {} template at {}",
        template,
        target.display()
    ));

    notifier.refresh();

    Ok(Outcome::Built(target))
}
