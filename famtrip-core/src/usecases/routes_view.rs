use super::prelude::*;

/// Page state of the routes section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RoutesView {
    #[default]
    List,
    Create,
    View {
        route_id: Id,
        editable: bool,
        use_routing: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutesViewEvent {
    StartCreating,
    Created(Id),
    Cancel,
    Open(Id),
    ToggleEditing,
    ToggleRouting,
    BackToList,
}

impl RoutesView {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "listing routes",
            Self::Create => "creating a route",
            Self::View { .. } => "viewing a route",
        }
    }

    pub fn handle(&mut self, event: RoutesViewEvent) -> Result<()> {
        use RoutesViewEvent as E;
        let next = match (&*self, event) {
            (Self::List, E::StartCreating) => Self::Create,
            (Self::List, E::Open(route_id)) => Self::View {
                route_id,
                editable: false,
                use_routing: true,
            },
            (Self::Create, E::Created(_) | E::Cancel) => Self::List,
            (
                Self::View {
                    route_id,
                    editable,
                    use_routing,
                },
                E::ToggleEditing,
            ) => Self::View {
                route_id: route_id.clone(),
                editable: !editable,
                use_routing: *use_routing,
            },
            (
                Self::View {
                    route_id,
                    editable,
                    use_routing,
                },
                E::ToggleRouting,
            ) => Self::View {
                route_id: route_id.clone(),
                editable: *editable,
                use_routing: !use_routing,
            },
            (Self::View { .. }, E::BackToList) => Self::List,
            (state, event) => {
                return Err(Error::InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                })
            }
        };
        log::debug!("Routes view: {} -> {}", self.name(), next.name());
        *self = next;
        Ok(())
    }
}

impl RoutesViewEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::StartCreating => "start creating",
            Self::Created(_) => "finish creating",
            Self::Cancel => "cancel",
            Self::Open(_) => "open a route",
            Self::ToggleEditing => "toggle editing",
            Self::ToggleRouting => "toggle routing",
            Self::BackToList => "go back to the list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RoutesViewEvent as E;

    #[test]
    fn create_and_return_to_list() {
        let mut view = RoutesView::default();
        view.handle(E::StartCreating).unwrap();
        assert_eq!(RoutesView::Create, view);
        view.handle(E::Created("r1".into())).unwrap();
        assert_eq!(RoutesView::List, view);
        view.handle(E::StartCreating).unwrap();
        view.handle(E::Cancel).unwrap();
        assert_eq!(RoutesView::List, view);
    }

    #[test]
    fn open_read_only_with_routing() {
        let mut view = RoutesView::List;
        view.handle(E::Open("r1".into())).unwrap();
        assert_eq!(
            RoutesView::View {
                route_id: "r1".into(),
                editable: false,
                use_routing: true
            },
            view
        );
        view.handle(E::ToggleEditing).unwrap();
        view.handle(E::ToggleRouting).unwrap();
        assert_eq!(
            RoutesView::View {
                route_id: "r1".into(),
                editable: true,
                use_routing: false
            },
            view
        );
        view.handle(E::BackToList).unwrap();
        assert_eq!(RoutesView::List, view);
        // flags are reset when opened again
        view.handle(E::Open("r1".into())).unwrap();
        assert!(matches!(
            view,
            RoutesView::View {
                editable: false,
                use_routing: true,
                ..
            }
        ));
    }

    #[test]
    fn reject_other_transitions() {
        let mut view = RoutesView::Create;
        assert!(matches!(
            view.handle(E::Open("r1".into())),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(RoutesView::Create, view);

        let mut view = RoutesView::List;
        assert!(view.handle(E::ToggleEditing).is_err());
        assert!(view.handle(E::BackToList).is_err());

        let mut view = RoutesView::View {
            route_id: "r1".into(),
            editable: false,
            use_routing: true,
        };
        assert!(view.handle(E::StartCreating).is_err());
        assert!(view.handle(E::Open("r2".into())).is_err());
    }
}
