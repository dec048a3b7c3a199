//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

pub mod mode;
pub mod url;
pub mod html;
pub mod escape;
pub mod mentions;
pub mod contractions;
pub mod case;
pub mod emoji;
pub mod hashtags;
pub mod short_words;
pub mod stopwords;
pub mod numbers;
pub mod alphabet;
pub mod punctuation;
pub mod tokenisation;
pub mod stemming;
pub mod lemmatization;
