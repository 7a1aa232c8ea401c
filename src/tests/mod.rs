// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod unit_tests;
#[cfg(test)]
mod xml;
