use gpui::{
    App, AppContext, Application, Bounds, Context, Menu, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, point, prelude::*, px, size,
};

use designhire_ui::{
    DesignHireAssets, assets,
    components::{
        Button, ButtonSize, ButtonVariant, Card, CardVariant, ErrorText, FilterTag, Heading,
        HeadingLevel, MutedText, ProfileProgressBar, ProgressBar, SkillTag, SuccessText, Tag,
        TagSize, TagVariant, Text,
    },
    theme::{Appearance, FontSizeKind, SpacingKind, ThemeExt},
};

const FILTERS: [&str; 3] = ["Remote", "Full time", "Contract"];

struct Gallery {
    appearance: Appearance,
    active_filters: [bool; 3],
    progress: f32,
    saving: bool,
}

impl Gallery {
    fn toggle_appearance(&mut self, cx: &mut Context<Self>) {
        self.appearance = match self.appearance {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        };
        cx.set_theme(self.appearance.theme());
        cx.notify();
    }
}

impl Render for Gallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        designhire_ui::init_for_window(window, cx);

        let theme = cx.get_theme();
        let gap = SpacingKind::Md.resolve(theme);
        let this = cx.entity().downgrade();

        let filters = FILTERS.iter().enumerate().map(|(ix, label)| {
            let this = this.clone();

            FilterTag::new(*label)
                .active(self.active_filters[ix])
                .on_press(move |_window, cx| {
                    let _ = this.update(cx, |gallery, cx| {
                        gallery.active_filters[ix] = !gallery.active_filters[ix];
                        cx.notify();
                    });
                })
        });

        div()
            .size_full()
            .bg(theme.colors.bg)
            .flex()
            .flex_col()
            .gap(gap)
            .p(SpacingKind::Xl.resolve(theme))
            .child(Heading::new("Design Hire").level(HeadingLevel::H1))
            .child(MutedText::new("Every component, styled from the same tokens."))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(gap)
                    .child(Button::new("primary", "Apply", |_, _| {
                        tracing::info!("apply pressed")
                    }))
                    .child(
                        Button::new("secondary", "Message", |_, _| {})
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Sm),
                    )
                    .child(
                        Button::new("outline", "Toggle theme", {
                            let this = this.clone();
                            move |_window, cx| {
                                let _ = this.update(cx, |gallery, cx| {
                                    gallery.toggle_appearance(cx)
                                });
                            }
                        })
                        .variant(ButtonVariant::Outline),
                    )
                    .child(
                        Button::new("ghost", "Disabled", |_, _| {})
                            .variant(ButtonVariant::Ghost)
                            .disabled(true),
                    ),
            )
            .child(
                Button::new("save", "Save profile", {
                    let this = this.clone();
                    move |_window, cx| {
                        let _ = this.update(cx, |gallery, cx| {
                            gallery.saving = true;
                            gallery.progress = (gallery.progress + 20.).min(100.);
                            cx.notify();
                        });
                    }
                })
                .size(ButtonSize::Lg)
                .loading(self.saving)
                .full_width(true),
            )
            .child(
                Card::new("profile-card")
                    .variant(CardVariant::Elevated)
                    .on_press({
                        let this = this.clone();
                        move |_window, cx| {
                            let _ = this.update(cx, |gallery, cx| {
                                gallery.saving = false;
                                cx.notify();
                            });
                        }
                    })
                    .child(Heading::new("Profile strength").level(HeadingLevel::H4))
                    .child(ProfileProgressBar::new(self.progress))
                    .child(
                        Text::new(format!("{}% complete", self.progress))
                            .size(FontSizeKind::Sm),
                    ),
            )
            .child(
                Card::new("skills-card")
                    .variant(CardVariant::Outlined)
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .flex_wrap()
                            .gap(SpacingKind::Sm.resolve(theme))
                            .child(SkillTag::new("Figma"))
                            .child(SkillTag::new("Prototyping"))
                            .child(Tag::new("New").variant(TagVariant::Primary).size(TagSize::Sm))
                            .child(Tag::new("Draft")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(SpacingKind::Sm.resolve(theme))
                    .children(filters),
            )
            .child(ProgressBar::new(150.).height(px(10.)))
            .child(SuccessText::new("Profile saved."))
            .child(ErrorText::new("Portfolio link is required."))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    Application::new()
        .with_assets(assets![DesignHireAssets])
        .run(|cx: &mut App| {
            designhire_ui::init(cx);

            cx.set_menus(vec![Menu {
                name: "Design Hire Gallery".into(),
                items: vec![],
            }]);

            cx.set_theme(Appearance::Light.theme());

            let bounds = Bounds::centered(None, size(px(420.), px(860.)), cx);

            let window = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Gallery {
                        appearance: Appearance::Light,
                        active_filters: [true, false, false],
                        progress: 40.,
                        saving: false,
                    })
                },
            );

            if let Err(err) = window {
                tracing::error!("failed to open gallery window: {err:?}");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
