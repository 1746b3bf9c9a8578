//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::{
    color::{Component, Components},
    config::Matrix,
};

/// A 3x3 matrix embedded in a 4x4 transform. Vectors are multiplied as rows,
/// i.e. `[x y z] * M`.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Threshold between the linear and cubic branches of the CIE lightness
/// function, (6/29)^3.
pub const CIE_E: Component = 216.0 / 24389.0;

/// Slope of the linear branch of the CIE lightness function, (29/3)^3.
pub const CIE_K: Component = 24389.0 / 27.0;

/// Build a [`Transform`] from the 9 entries of a 3x3 matrix, row by row.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Build a [`Transform`] from a matrix stored as rows.
pub fn from_rows(m: &Matrix) -> Transform {
    transform_3x3(
        m[0][0], m[0][1], m[0][2], //
        m[1][0], m[1][1], m[1][2], //
        m[2][0], m[2][1], m[2][2],
    )
}

/// Multiply the 3 components with the matrix in `transform`.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Hue angle in degrees of the vector (`x`, `y`), in `[0, 360)`.
pub fn hue_from_cartesian(x: Component, y: Component) -> Component {
    normalize_hue(y.atan2(x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transform_multiplies_row_vector() {
        let m = transform_3x3(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let Components(x, y, z) = transform(&m, Components(1.0, 0.0, 0.0));
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));

        let Components(x, y, z) = transform(&m, Components(1.0, 1.0, 1.0));
        assert_eq!((x, y, z), (12.0, 15.0, 18.0));
    }

    #[test]
    fn from_rows_matches_transform_3x3() {
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(
            from_rows(&rows),
            transform_3x3(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
        );
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_component_eq!(normalize_hue(-30.0), 330.0);
        assert_component_eq!(normalize_hue(720.0), 0.0);
        assert_component_eq!(normalize_hue(359.5), 359.5);
        assert!(normalize_hue(-1e-20) < 360.0);

        assert_component_eq!(hue_from_cartesian(0.0, 1.0), 90.0);
        assert_component_eq!(hue_from_cartesian(-1.0, 0.0), 180.0);
        assert_component_eq!(hue_from_cartesian(0.0, -1.0), 270.0);
        assert_component_eq!(hue_from_cartesian(0.0, 0.0), 0.0);
    }
}
