//! Accessor generators for attributes whose path is a field of
//! `KeyboardAttrs`. The generated methods expect `self.attrs` to be a
//! `KeyboardAttrs`.

#[macro_export]
macro_rules! has_attr {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = has_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self) -> bool {
                self.attrs.$item.is_file()
            }
        });
    };
}

#[macro_export]
macro_rules! get_attr_bool {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = get_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self) -> Result<Option<bool>> {
                crate::read_attr_bool(&self.attrs.$item)
            }
        });
    };
}

#[macro_export]
macro_rules! set_attr_bool {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = set_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self, value: bool) -> Result<()> {
                crate::write_attr_bool(&self.attrs.$item, value)
            }
        });
    };
}

#[macro_export]
macro_rules! attr_bool {
    ($attr_name:literal, $item:ident) => {
        crate::has_attr!($attr_name $item);
        crate::get_attr_bool!($attr_name $item);
        crate::set_attr_bool!($attr_name $item);
    };
}

#[macro_export]
macro_rules! get_attr_u8 {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = get_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self) -> Result<Option<u8>> {
                crate::read_attr_u8(&self.attrs.$item)
            }
        });
    };
}

#[macro_export]
macro_rules! set_attr_u8 {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = set_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self, value: u8) -> Result<()> {
                crate::write_attr_u8(&self.attrs.$item, value)
            }
        });
    };
}

#[macro_export]
macro_rules! attr_u8 {
    ($attr_name:literal, $item:ident) => {
        crate::has_attr!($attr_name $item);
        crate::get_attr_u8!($attr_name $item);
        crate::set_attr_u8!($attr_name $item);
    };
}
