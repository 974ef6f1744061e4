/// Folds the error types of the submodules into `deephistory::Error`,
/// one `From` implementation per `Type => Variant` pair.
///
/// ```rust,ignore
/// use deephistory::client::ClientError;
/// deephistory::impl_err!(ClientError => Client, tera::Error => Render);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($($from:ty => $variant:ident),+ $(,)?) => {
            $(
                impl From<$from> for $crate::Error {
                    fn from(value: $from) -> Self {
                        $crate::Error::$variant(value)
                    }
                }
            )+
        };
    }

    pub use impl_err;
}
