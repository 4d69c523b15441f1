use alloc::string::String;
use alloc::sync::Arc;

/// Renders one cell: receives the row and its absolute index.
pub type CellRenderer<T, O> = Arc<dyn Fn(&T, usize) -> O + Send + Sync>;

/// A column descriptor.
///
/// Rendering is a function-valued field, so a column is plain data: cloning is cheap and no
/// trait objects per column type are needed. `O` is whatever the host paints (a `String`, a
/// styled span, a widget handle).
pub struct Column<T, O = String> {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub width: Option<u32>,
    pub render: CellRenderer<T, O>,
}

impl<T, O> Column<T, O> {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        render: impl Fn(&T, usize) -> O + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            render: Arc::new(render),
        }
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self, row: &T, index: usize) -> O {
        (self.render)(row, index)
    }
}

impl<T, O> Clone for Column<T, O> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            width: self.width,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T, O> core::fmt::Debug for Column<T, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
