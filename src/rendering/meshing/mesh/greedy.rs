//! Greedy meshing implementation for voxel rendering.
//!
//! This module implements the greedy meshing algorithm which combines adjacent coplanar
//! faces of one material into larger quads, significantly reducing the number of
//! vertices and triangles needed to render a voxel surface.
//!
//! Each face plane is swept row by row. Visible unit faces in a row are first
//! joined into runs with [`Face::merge_right`]; each run is then joined with the
//! rectangle directly below it when both span the same columns ([`Face::merge_up`]).
//! Rectangles that cannot grow any further are emitted.

use crate::voxels::{block_side::BlockSide, occupancy::OccupancyMask};

use super::face::Face;

/// Collects the visible faces of `mask`.
///
/// A face is visible when its cell is occupied and the neighbour across it is
/// empty or outside the mask. With `merge` unset every visible face is returned
/// as its own unit quad; otherwise faces are merged greedily. Either way the
/// covered surface is identical and the output order is fully determined by the
/// mask: sides in slot order, then layers, then rows.
pub fn collect_faces(mask: &OccupancyMask, merge: bool) -> Vec<Face> {
    let dimensions = mask.dimensions();
    let mut faces_to_make = Vec::new();

    for side in BlockSide::all() {
        let (u_axis, v_axis) = side.plane_axes();

        for layer in 0..dimensions[side.axis()] {
            let mut open_faces = Vec::new();

            for v in 0..dimensions[v_axis] {
                let row = collect_row(mask, side, layer, v, dimensions[u_axis], merge);
                if merge {
                    open_faces = merge_rows(open_faces, row, &mut faces_to_make);
                } else {
                    faces_to_make.extend(row);
                }
            }

            faces_to_make.extend(open_faces);
        }
    }

    faces_to_make
}

/// Gathers the visible faces of one row, joining neighbours into runs when merging.
fn collect_row(
    mask: &OccupancyMask,
    side: BlockSide,
    layer: usize,
    v: usize,
    row_len: usize,
    merge: bool,
) -> Vec<Face> {
    let (u_axis, v_axis) = side.plane_axes();
    let mut runs: Vec<Face> = Vec::new();

    for u in 0..row_len {
        let mut position = [0; 3];
        position[side.axis()] = layer;
        position[u_axis] = u;
        position[v_axis] = v;

        if !mask.is_face_visible(position, side) {
            continue;
        }

        let face = Face::new(position, side);
        if merge {
            if let Some(merged) = runs.last().and_then(|last| last.merge_right(&face)) {
                runs.pop();
                runs.push(merged);
                continue;
            }
        }
        runs.push(face);
    }

    runs
}

/// Grows the rectangles of the previous rows with the runs of the current row.
///
/// Both inputs are sorted by `u` and non-overlapping. Rectangles that are not
/// continued are pushed to `faces_to_make`; the returned vector holds the
/// rectangles that are still open after this row, again sorted by `u`.
fn merge_rows(
    open_faces: Vec<Face>,
    current_row: Vec<Face>,
    faces_to_make: &mut Vec<Face>,
) -> Vec<Face> {
    let mut still_open = Vec::with_capacity(current_row.len());
    let mut before = open_faces.into_iter().peekable();

    for run in current_row {
        while let Some(closed) = before.next_if(|face| face.u < run.u) {
            faces_to_make.push(closed);
        }

        match before.next_if(|face| face.u == run.u) {
            Some(below) => match below.merge_up(&run) {
                Some(merged) => still_open.push(merged),
                None => {
                    faces_to_make.push(below);
                    still_open.push(run);
                }
            },
            None => still_open.push(run),
        }
    }

    faces_to_make.extend(before);
    still_open
}
