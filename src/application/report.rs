use std::fmt;

use colored::Colorize;

use crate::catalog::Node;
use crate::selector::SelectionLevel;
use crate::session::{ConnectSession, ContentTab};

/// A selectable entry, printed as `label (key)` when the two differ.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    key: String,
    label: String,
}

impl Choice {
    fn from_node(node: &Node) -> Self {
        Choice {
            key: node.key().to_string(),
            label: node.label().to_string(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label == self.key {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{} ({})", self.label, self.key)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LevelLine {
    level: SelectionLevel,
    selected: Option<Choice>,
    options: Vec<Choice>,
}

/// Plain-text snapshot of a session: the visible selection levels with their
/// options, followed by the resolved content tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    catalog: Option<String>,
    catalog_names: Vec<String>,
    levels: Vec<LevelLine>,
    tabs: Vec<ContentTab>,
}

impl Report {
    pub fn from_session(session: &ConnectSession) -> Self {
        let selector = session.selector();
        let levels = SelectionLevel::ALL
            .into_iter()
            .filter(|level| selector.is_level_visible(*level))
            .map(|level| LevelLine {
                level,
                selected: selector.selected_node(level).map(Choice::from_node),
                options: selector
                    .options(level)
                    .into_iter()
                    .map(Choice::from_node)
                    .collect(),
            })
            .collect();

        Report {
            catalog: session.active_catalog().map(str::to_string),
            catalog_names: session.catalog_names().map(str::to_string).collect(),
            levels,
            tabs: session.content_tabs(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog.as_deref().unwrap_or("<none>");
        writeln!(
            f,
            "{} {} [{}]",
            "Catalog:".bold(),
            catalog,
            self.catalog_names.join(", ")
        )?;

        for line in &self.levels {
            let selected = line
                .selected
                .as_ref()
                .map_or_else(|| "-".to_string(), Choice::to_string);
            let options = line
                .options
                .iter()
                .map(Choice::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{:<10} {} [{}]",
                line.level.caption().bold(),
                selected.green(),
                options
            )?;
        }

        writeln!(f, "{}", "Files:".bold())?;
        if self.tabs.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for tab in &self.tabs {
            if tab.pooler {
                writeln!(f, "  {} {}", tab.to_string().cyan(), "(pooler)".dimmed())?;
            } else {
                writeln!(f, "  {}", tab.to_string().cyan())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::catalog::CatalogRegistry;

    #[fixture]
    fn session() -> ConnectSession {
        colored::control::set_override(false);
        let registry: CatalogRegistry = r#"
catalogs:
  frameworks:
    nextjs:
      children:
        app:
          children:
            supabasejs:
              files:
                - path: nextjs/app/env
                  name: .env.local
            ssr: {}
        pages: {}
    astro:
      files:
        - path: astro/env
          name: .env
"#
        .try_into()
        .expect("Failed to parse registry");
        ConnectSession::new(registry)
    }

    #[rstest]
    fn report_lists_visible_levels_and_files(session: ConnectSession) {
        let report = Report::from_session(&session).to_string();

        assert_eq!(
            report,
            "Catalog: frameworks [frameworks]\n\
             Framework  nextjs [nextjs, astro]\n\
             Using      app [app, pages]\n\
             With       supabasejs [supabasejs, ssr]\n\
             Files:\n  \
             .env.local\n"
        );
    }

    #[rstest]
    fn report_hides_empty_levels_and_marks_pooler(mut session: ConnectSession) {
        session
            .select(SelectionLevel::Parent, "astro")
            .expect("astro is offered");
        session.set_connection_pooler(true);

        let report = Report::from_session(&session).to_string();

        assert_eq!(
            report,
            "Catalog: frameworks [frameworks]\n\
             Framework  astro [nextjs, astro]\n\
             Files:\n  \
             .env (pooler)\n"
        );
    }

    #[rstest]
    fn report_without_files(mut session: ConnectSession) {
        session
            .select(SelectionLevel::Grandchild, "ssr")
            .expect("ssr is offered");

        let report = Report::from_session(&session).to_string();
        assert!(report.ends_with("Files:\n  (none)\n"));
    }

    #[test]
    fn report_prints_labels_next_to_keys() {
        colored::control::set_override(false);
        let registry: CatalogRegistry = r#"
catalogs:
  frameworks:
    nextjs:
      label: Next.js
      children:
        app:
          label: App Router
        pages:
          label: Pages Router
    remix: {}
  orms:
    prisma:
      label: Prisma
"#
        .try_into()
        .expect("Failed to parse registry");
        let session = ConnectSession::new(registry);

        let report = Report::from_session(&session).to_string();

        assert_eq!(
            report,
            "Catalog: frameworks [frameworks, orms]\n\
             Framework  Next.js (nextjs) [Next.js (nextjs), remix]\n\
             Using      App Router (app) [App Router (app), Pages Router (pages)]\n\
             Files:\n  \
             (none)\n"
        );
    }
}
