use crate::section::Section;

// a section is considered active slightly before its top edge reaches the top of the viewport
pub const LOOK_AHEAD_PX: f64 = 100.0;

// vertical extent of a section on the page, as measured from offsetTop/offsetHeight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        SectionSpan {
            section,
            top,
            height,
        }
    }

    // half-open, so adjacent sections never both contain the same offset
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

// find the section under the scroll position
//
// spans are checked in declared section order regardless of the order they are passed in, and
// the first match wins; overlapping spans therefore resolve to the earlier section
pub fn locate(scroll_y: f64, spans: &[SectionSpan]) -> Option<Section> {
    let offset = scroll_y + LOOK_AHEAD_PX;

    Section::ALL.into_iter().find(|section| {
        spans
            .iter()
            .filter(|span| span.section == *section)
            .any(|span| span.contains(offset))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // a typical layout: 800px hero followed by stacked sections
    fn layout() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(Section::Home, 0.0, 800.0),
            SectionSpan::new(Section::About, 800.0, 600.0),
            SectionSpan::new(Section::Services, 1400.0, 900.0),
            SectionSpan::new(Section::Portfolio, 2300.0, 1000.0),
            SectionSpan::new(Section::Contact, 3300.0, 700.0),
        ]
    }

    #[test]
    fn every_position_inside_a_span_selects_only_that_section() {
        let spans = layout();

        for span in &spans {
            let start = span.top - LOOK_AHEAD_PX;
            let end = span.top + span.height - LOOK_AHEAD_PX;

            let mut y = start.max(-LOOK_AHEAD_PX);
            while y < end {
                assert_eq!(locate(y, &spans), Some(span.section), "scroll_y = {y}");
                y += 25.0;
            }
            assert_eq!(locate(end - 0.5, &spans), Some(span.section));
        }
    }

    #[test]
    fn look_ahead_switches_before_the_top_edge() {
        let spans = layout();

        assert_eq!(locate(699.0, &spans), Some(Section::Home));
        assert_eq!(locate(700.0, &spans), Some(Section::About));
    }

    #[test]
    fn outside_every_span() {
        let spans = layout();

        assert_eq!(locate(3900.0, &spans), None);
        assert_eq!(locate(0.0, &[]), None);
    }

    #[test]
    fn overlap_favors_the_earlier_section() {
        // portfolio listed first on purpose; declared order still decides
        let spans = vec![
            SectionSpan::new(Section::Portfolio, 1000.0, 500.0),
            SectionSpan::new(Section::Services, 900.0, 400.0),
        ];

        assert_eq!(locate(1000.0, &spans), Some(Section::Services));
        assert_eq!(locate(1250.0, &spans), Some(Section::Portfolio));
    }

    #[test]
    fn zero_height_span_never_matches() {
        let spans = vec![
            SectionSpan::new(Section::About, 500.0, 0.0),
            SectionSpan::new(Section::Services, 500.0, 300.0),
        ];

        assert_eq!(locate(400.0, &spans), Some(Section::Services));
    }
}
