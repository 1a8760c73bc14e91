//! Template sources for generated files.
//!
//! Templates are plain constants handed to the rendering functions in
//! [`crate::build`] together with an explicit context; nothing here carries
//! state.

/// The generated Swift source file.
///
/// Context shape (see `SourceContext` in `build::apple`):
/// - `namespace`, `framework`, `class_name`, `bundle`: plain strings
/// - `acl`: `"public "` or `""`
/// - `defined`, `aliases`: entry lists, each with `name`, `constant_name`
///   and a ready-made `comment` line
///
/// The two section banners are emitted once per non-empty list.
pub(crate) const SWIFT_SOURCE: &str = r#"//
//  {{ namespace }}.swift
//  This file was autogenerated by palettegen.
//  Do not modify as it can easily be overwritten.

import {{ framework }}

{{ acl }}enum {{ namespace }} {
{%- if defined %}

    //-------- Defined Colors with Provided Hex Values
{%- endif %}
{%- for color in defined %}

    {{ color.comment }}
    {{ acl }}static let {{ color.constant_name }}: {{ class_name }} = {{ class_name }}(named: Name.{{ color.constant_name }}, in: .{{ bundle }}, compatibleWith: nil)!
{%- endfor %}
{%- if aliases %}

    //-------- Color Aliases referencing the defined colors above
{%- endif %}
{%- for color in aliases %}

    {{ color.comment }}
    {{ acl }}static let {{ color.constant_name }}: {{ class_name }} = {{ class_name }}(named: Name.{{ color.constant_name }}, in: .{{ bundle }}, compatibleWith: nil)!
{%- endfor %}

    //-------- Constants used for named colors (you will likely never need them but here for completeness)
    {{ acl }}enum Name {
{%- for color in defined %}
        {{ acl }}static let {{ color.constant_name }}: String = "{{ color.name }}"
{%- endfor %}
{%- for color in aliases %}
        {{ acl }}static let {{ color.constant_name }}: String = "{{ color.name }}"
{%- endfor %}
    }
}
"#;
