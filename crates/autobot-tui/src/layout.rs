//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + nav row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Width of the AI diagnosis side panel
pub const AUX_PANEL_WIDTH: u16 = 38;

/// Narrowest detail content kept visible next to the side panel
const MIN_CONTENT_WIDTH: u16 = 40;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and nav tabs
    pub header: Rect,

    /// Area grid, detail view or fleet list
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas inside the detail view
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    /// Breadcrumb, title and status badge
    pub title: Rect,

    /// Sub-tab bar
    pub tabs: Rect,

    /// Active tab content
    pub content: Rect,

    /// AI diagnosis panel, when open and wide enough
    pub aux: Option<Rect>,
}

pub fn detail(area: Rect, aux_open: bool) -> DetailAreas {
    let (main, aux) = if aux_open && area.width >= AUX_PANEL_WIDTH + MIN_CONTENT_WIDTH {
        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(AUX_PANEL_WIDTH)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(main);

    DetailAreas {
        title: rows[0],
        tabs: rows[1],
        content: rows[2],
        aux,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.body.y, HEADER_HEIGHT);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_detail_without_aux_panel() {
        let area = Rect::new(0, 4, 120, 30);
        let layout = detail(area, false);

        assert!(layout.aux.is_none());
        assert_eq!(layout.title.width, 120);
        assert_eq!(layout.tabs.y, 8);
        assert_eq!(layout.content.height, 30 - 5);
    }

    #[test]
    fn test_detail_with_aux_panel() {
        let area = Rect::new(0, 4, 120, 30);
        let layout = detail(area, true);

        let aux = layout.aux.unwrap();
        assert_eq!(aux.width, AUX_PANEL_WIDTH);
        assert_eq!(aux.height, 30);
        assert_eq!(layout.content.width, 120 - AUX_PANEL_WIDTH);
    }

    #[test]
    fn test_aux_panel_hidden_when_narrow() {
        let area = Rect::new(0, 0, 60, 20);
        let layout = detail(area, true);
        assert!(layout.aux.is_none());
        assert_eq!(layout.content.width, 60);
    }
}
