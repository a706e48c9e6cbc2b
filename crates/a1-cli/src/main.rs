use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use a1_client::ReqwestCms;
use a1_core::models::{LeadSubmission, MenuItem, ResumeFile};
use a1_core::{PlannedSection, SiteService, plan_sections};
use a1_web::format::ImageUrls;
use a1_web::loader::{JobsWindow, load_section_env};
use a1_web::render::{SiteChrome, render_page};

type Site = SiteService<ReqwestCms, ReqwestCms>;

#[derive(Parser)]
#[command(name = "a1", version, about = "Operator tools for the A1 recruitment site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the CMS lives and how long to wait for it.
#[derive(Args)]
struct CmsArgs {
    /// CMS API base URL
    #[arg(long, env = "A1_API_URL")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "A1_CMS_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a page's sections after de-duplication and ordering
    Sections {
        /// Page slug (e.g. "home")
        slug: String,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        cms: CmsArgs,
    },

    /// Print the navigation menu tree
    Menu {
        #[command(flatten)]
        cms: CmsArgs,
    },

    /// Render a page to HTML
    Render {
        /// Page slug (e.g. "home")
        slug: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Base URL for section images
        #[arg(long, env = "A1_IMAGE_URL")]
        image_url: Option<String>,

        /// Job listings per page for jobs sections
        #[arg(long, env = "A1_JOBS_PER_PAGE", default_value_t = 6)]
        jobs_per_page: i64,

        #[command(flatten)]
        cms: CmsArgs,
    },

    /// Submit a lead to the CMS
    Lead {
        #[arg(long)]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        role: String,

        #[arg(long, default_value = "")]
        requirements: String,

        /// Source tag stored with the lead
        #[arg(long, default_value = "CLI")]
        source: String,

        /// Resume file to attach (sent as multipart)
        #[arg(long)]
        resume: Option<PathBuf>,

        #[command(flatten)]
        cms: CmsArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("a1=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sections { slug, json, cms } => {
            let (site, _) = connect(&cms)?;
            cmd_sections(&site, &slug, json).await?;
        }
        Commands::Menu { cms } => {
            let (site, _) = connect(&cms)?;
            cmd_menu(&site).await?;
        }
        Commands::Render {
            slug,
            out,
            image_url,
            jobs_per_page,
            cms,
        } => {
            let (site, api_url) = connect(&cms)?;
            let images = ImageUrls::new(&api_url, image_url.as_deref());
            cmd_render(&site, &slug, images, jobs_per_page, out.as_deref()).await?;
        }
        Commands::Lead {
            first_name,
            last_name,
            email,
            phone,
            company,
            role,
            requirements,
            source,
            resume,
            cms,
        } => {
            let (site, _) = connect(&cms)?;
            let lead = LeadSubmission {
                first_name,
                last_name,
                email,
                phone,
                company_name: company,
                role_to_hire: role,
                requirements,
                source,
            };
            cmd_lead(&site, &lead, resume.as_deref()).await?;
        }
    }

    Ok(())
}

/// Build the CMS facade; also returns the normalised base URL.
fn connect(args: &CmsArgs) -> Result<(Site, String)> {
    if args.timeout == 0 {
        bail!("--timeout must be at least 1 second");
    }
    let cms = ReqwestCms::with_timeout(&args.api_url, Duration::from_secs(args.timeout))
        .context("Failed to create CMS client")?;
    let base = cms.base_url().to_string();
    Ok((SiteService::new(cms.clone(), cms, Duration::from_secs(60)), base))
}

async fn cmd_sections(site: &Site, slug: &str, json: bool) -> Result<()> {
    let page = site
        .page(slug)
        .await?
        .with_context(|| format!("No page with slug '{slug}'"))?;
    let plan = plan_sections(page.arranged_sections());

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{} ({} sections)\n", page.display_title(), plan.len());
    for line in plan.iter().map(section_line) {
        println!("{line}");
    }
    Ok(())
}

fn section_line(section: &PlannedSection) -> String {
    format!(
        "{:>5}  {:>6}  {:<24}  {:<28}  {}",
        section.sort_order,
        section.id,
        section.section_key,
        section.kind,
        section.title.as_deref().unwrap_or("-"),
    )
}

async fn cmd_menu(site: &Site) -> Result<()> {
    let Some(menu) = site.menu().await.into_ready() else {
        bail!("Menu could not be loaded (see log for details)");
    };
    if menu.is_empty() {
        println!("Menu is empty");
        return Ok(());
    }
    let mut lines = Vec::new();
    menu_lines(&menu, 0, &mut lines);
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn menu_lines(items: &[MenuItem], depth: usize, out: &mut Vec<String>) {
    for item in items {
        out.push(format!(
            "{}{} -> {}",
            "  ".repeat(depth),
            item.title,
            item.href()
        ));
        menu_lines(&item.children, depth + 1, out);
    }
}

async fn cmd_render(
    site: &Site,
    slug: &str,
    images: ImageUrls,
    jobs_per_page: i64,
    out: Option<&Path>,
) -> Result<()> {
    let (page, chrome) = tokio::join!(site.page(slug), site.chrome());
    let page = page?.with_context(|| format!("No page with slug '{slug}'"))?;
    let chrome = SiteChrome::from_chrome(chrome, chrono::Utc::now());

    let jobs = JobsWindow {
        page: 1,
        per_page: jobs_per_page,
        path: format!("/{slug}"),
    };
    let env = load_section_env(site, &page, images, jobs).await;
    let html = render_page(&page, chrome, &env);

    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Page rendered");
        }
        None => println!("{html}"),
    }
    Ok(())
}

async fn cmd_lead(site: &Site, lead: &LeadSubmission, resume: Option<&Path>) -> Result<()> {
    let resume = match resume {
        Some(path) => Some(read_resume(path)?),
        None => None,
    };
    site.submit_lead(lead, resume).await?;
    tracing::info!(email = %lead.email, source = %lead.source, "Lead submitted");
    println!("Lead submitted for {}", lead.email);
    Ok(())
}

fn read_resume(path: &Path) -> Result<ResumeFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();
    Ok(ResumeFile {
        content_type: content_type_for(path).to_string(),
        file_name,
        bytes,
    })
}

/// MIME type for common CV formats, by extension.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("rtf") => "application/rtf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("cv.PDF")), "application/pdf");
        assert!(content_type_for(Path::new("cv.docx")).ends_with("wordprocessingml.document"));
        assert_eq!(content_type_for(Path::new("cv")), "application/octet-stream");
    }

    #[test]
    fn test_read_resume() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();

        let resume = read_resume(file.path()).unwrap();
        assert_eq!(resume.content_type, "application/pdf");
        assert_eq!(resume.bytes, b"%PDF-1.4");
        assert!(resume.file_name.ends_with(".pdf"));
    }

    #[test]
    fn test_menu_lines_indent_children() {
        let menu = vec![MenuItem {
            title: "Services".into(),
            url: Some("/services".into()),
            children: vec![MenuItem {
                title: "Staffing".into(),
                url: Some("/services/staffing".into()),
                ..Default::default()
            }],
            ..Default::default()
        }];
        let mut lines = Vec::new();
        menu_lines(&menu, 0, &mut lines);
        assert_eq!(
            lines,
            vec!["Services -> /services", "  Staffing -> /services/staffing"]
        );
    }

    #[test]
    fn test_cli_parses_lead() {
        let cli = Cli::try_parse_from([
            "a1",
            "lead",
            "--first-name",
            "Ada",
            "--email",
            "ada@example.com",
            "--api-url",
            "http://localhost:4000",
        ])
        .unwrap();
        match cli.command {
            Commands::Lead { source, resume, .. } => {
                assert_eq!(source, "CLI");
                assert!(resume.is_none());
            }
            _ => panic!("expected lead command"),
        }
    }
}
