use iced::{
    Color, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme, mouse,
    widget::{
        button, canvas, column, container, row, text, text_input,
        canvas::{Frame, Geometry, Path, Stroke},
    },
};
use iced_widget::container::bordered_box;

use crate::{
    core::{
        geo::{Marker, MarkerSelection, Projection, Viewport, hit_test, project_all},
        query::Query,
        store::RecordStore,
    },
    gui::{
        AppState, NavRequest,
        screens::{Screen, ScreenMessage},
        widgets::{MUTED, header, health_color, stat_card},
    },
    models::{Health, TreeId},
};

const MAP_HEIGHT: f32 = 480.0;
const MARKER_RADIUS: f32 = 8.0;
const GRID_SPACING: f32 = 40.0;

#[derive(Debug, Clone, Default)]
pub struct MapScreen {
    query: String,
    selection: MarkerSelection,
}

#[derive(Debug, Clone)]
pub enum MapMessage {
    QueryChanged(String),
    MarkerClicked(TreeId),
    ClearSelection,
}

impl Screen for MapScreen {
    type Message = MapMessage;
    type ParentMessage = NavRequest;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let visible = Query::new(&self.query).filter(state.store.records());
        let markers = project_all(visible.iter().copied(), &state.bounds, &state.viewport);
        let summary = state.summary();

        let map = canvas(TreeMap {
            markers,
            selection: self.selection,
            viewport: state.viewport,
        })
        .width(Length::Fill)
        .height(Length::Fixed(MAP_HEIGHT));

        let mut side = column![text(format!("Total Trees: {}", visible.len())).size(16)].spacing(10);
        if let Some(tree) = self
            .selection
            .selected()
            .and_then(|id| visible.iter().copied().find(|tree| tree.id == id))
        {
            side = side.push(
                container(
                    column![
                        text(tree.name.as_str()).size(18),
                        text(tree.species.as_str()).size(14).color(MUTED),
                        row![
                            text(tree.health.label()).color(health_color(tree.health)),
                            text(tree.area.as_str()).color(MUTED),
                        ]
                        .spacing(12),
                        button("View Details")
                            .on_press(ScreenMessage::ParentMessage(NavRequest::SelectTree(tree.id))),
                        button("Clear")
                            .style(button::text)
                            .on_press(ScreenMessage::ScreenMessage(MapMessage::ClearSelection)),
                    ]
                    .spacing(8),
                )
                .padding(12)
                .style(bordered_box),
            );
        }
        side = side.push(legend());

        column![
            header("Tree Map", "Interactive map of all registered trees in Badulla"),
            text_input("Search trees, species, or areas...", &self.query)
                .on_input(|query| ScreenMessage::ScreenMessage(MapMessage::QueryChanged(query)))
                .padding(8),
            row![
                container(map).width(Length::FillPortion(4)).style(bordered_box),
                container(side).width(Length::FillPortion(1)),
            ]
            .spacing(16),
            row![
                stat_card("Healthy Trees", summary.health.healthy, Some(health_color(Health::Healthy))),
                stat_card("Moderate Health", summary.health.moderate, Some(health_color(Health::Moderate))),
                stat_card("Need Attention", summary.health.poor, Some(health_color(Health::Poor))),
                stat_card("Areas Covered", summary.areas, None),
            ]
            .spacing(16),
        ]
        .spacing(16)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            MapMessage::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            MapMessage::MarkerClicked(id) => {
                self.selection.select_at(id);
                Task::done(ScreenMessage::ParentMessage(NavRequest::SelectTree(id)))
            }
            MapMessage::ClearSelection => {
                self.selection.clear();
                Task::none()
            }
        }
    }
}

fn legend<'a>() -> Element<'a, ScreenMessage<MapScreen>> {
    let entries = [
        (Health::Healthy, "Healthy Tree"),
        (Health::Moderate, "Moderate Health"),
        (Health::Poor, "Poor Health"),
    ]
    .into_iter()
    .fold(column![text("Legend").size(16)].spacing(6), |legend, (health, label)| {
        legend.push(row![text("●").color(health_color(health)), text(label).size(14)].spacing(8))
    });
    container(entries).padding(12).style(bordered_box).into()
}

fn grid_stroke() -> Stroke<'static> {
    Stroke::default()
        .with_width(0.5)
        .with_color(Color::from_rgba8(0x94, 0xa3, 0xb8, 0.4))
}

/// Canvas drawing every visible tree as a pin at its projected position.
struct TreeMap {
    markers: Vec<Marker>,
    selection: MarkerSelection,
    viewport: Viewport,
}

impl TreeMap {
    fn to_screen(&self, position: Projection, size: Size) -> Point {
        Point::new(
            (position.x / self.viewport.width * f64::from(size.width)) as f32,
            (position.y / self.viewport.height * f64::from(size.height)) as f32,
        )
    }

    /// Markers in canvas pixels, so hits are tested against the drawn pins.
    fn screen_markers(&self, size: Size) -> Vec<Marker> {
        self.markers
            .iter()
            .map(|marker| {
                let point = self.to_screen(marker.position, size);
                Marker {
                    position: Projection {
                        x: f64::from(point.x),
                        y: f64::from(point.y),
                    },
                    ..*marker
                }
            })
            .collect()
    }
}

impl canvas::Program<ScreenMessage<MapScreen>> for TreeMap {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<ScreenMessage<MapScreen>>> {
        let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return None;
        };
        let position = cursor.position_in(bounds)?;
        let click = Projection {
            x: f64::from(position.x),
            y: f64::from(position.y),
        };
        let id = hit_test(
            &self.screen_markers(bounds.size()),
            click,
            f64::from(MARKER_RADIUS + 2.0),
        )?;
        Some(
            canvas::Action::publish(ScreenMessage::ScreenMessage(MapMessage::MarkerClicked(id)))
                .and_capture(),
        )
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let mut x = 0.0;
        while x <= bounds.width {
            frame.stroke(&Path::line(Point::new(x, 0.0), Point::new(x, bounds.height)), grid_stroke());
            x += GRID_SPACING;
        }
        let mut y = 0.0;
        while y <= bounds.height {
            frame.stroke(&Path::line(Point::new(0.0, y), Point::new(bounds.width, y)), grid_stroke());
            y += GRID_SPACING;
        }

        for marker in &self.markers {
            let center = self.to_screen(marker.position, bounds.size());
            if self.selection.is_selected(marker.id) {
                frame.fill(&Path::circle(center, MARKER_RADIUS + 3.0), health_color(marker.health));
                frame.stroke(
                    &Path::circle(center, MARKER_RADIUS + 3.0),
                    Stroke::default().with_width(2.0).with_color(Color::BLACK),
                );
            } else {
                frame.fill(&Path::circle(center, MARKER_RADIUS), health_color(marker.health));
            }
        }

        vec![frame.into_geometry()]
    }
}
